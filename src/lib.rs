//! Galr - a tag-based image gallery browser
//!
//! This library provides the catalog, the filter engine and the navigation
//! state machine behind the `galr` command. Everything is synchronous and
//! in memory; frontends drive a [`nav::GallerySession`] with intents and
//! render the views it reports.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod logging;
pub mod nav;
pub mod output;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, ImageRecord};
pub use filter::{ArchiveCategory, FilterState, Selector, visible_images};
pub use nav::{GallerySession, Intent, Screen};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GalrError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Navigation error
    #[error("{0}")]
    NavError(#[from] nav::NavError),
    /// Filter error
    #[error("Filter error: {0}")]
    FilterError(#[from] filter::FilterError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
