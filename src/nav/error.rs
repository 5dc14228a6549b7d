//! Navigation error types

use crate::filter::FilterError;
use thiserror::Error;

/// Errors returned by [`GallerySession::dispatch`](super::GallerySession::dispatch)
///
/// A rejected intent leaves the session untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// The intent has no meaning on the current screen
    #[error("'{intent}' is not available on the {screen} screen")]
    IntentNotAvailable {
        intent: &'static str,
        screen: &'static str,
    },

    /// Explicit tag filters cannot be combined with a pinned tag
    #[error("Browsing tag '{0}'; show all images before filtering by tags")]
    TagPinned(String),

    /// Invalid filter input
    #[error(transparent)]
    Filter(#[from] FilterError),
}
