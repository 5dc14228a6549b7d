//! Error types for catalog operations
//!
//! Catalog loading is the only place where `galr` touches user-supplied data,
//! so most variants describe a malformed catalog file. `NotFound` is the
//! detail lookup miss and is expected during normal use.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or querying a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No image with the given id
    #[error("Image '{0}' not found")]
    NotFound(String),

    /// Two records share an id
    #[error("Duplicate image id '{0}' in catalog")]
    DuplicateId(String),

    /// A record carries an empty or whitespace-only tag
    #[error("Image '{id}' has an invalid tag '{tag}'")]
    InvalidTag { id: String, tag: String },

    /// Catalog file contains no images
    #[error("Catalog contains no images")]
    Empty,

    /// I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog file could not be parsed
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
