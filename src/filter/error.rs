//! Error types for the filter engine

use thiserror::Error;

/// Errors raised while building filter state
///
/// Filtering itself cannot fail; an empty result is a valid outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Category name outside the fixed archive set
    #[error("Unknown archive category '{0}' (expected nature, art or architecture)")]
    UnknownCategory(String),

    /// Blank tag given to a tag filter
    #[error("Tag must not be empty")]
    EmptyTag,
}
