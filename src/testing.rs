//! Testing utilities for galr
//!
//! This module provides fixtures shared by the unit tests: the sample
//! catalog, a helper to compare results by id, and a `TempConfig` wrapper
//! for configuration files that cleans up on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, ImageRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The built-in six image catalog
pub fn sample_catalog() -> Catalog {
    Catalog::sample()
}

/// Ids of records, in order
pub fn ids<'a>(records: &[&'a ImageRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// A config file path inside a temporary directory
///
/// The directory and everything in it is removed when the wrapper is dropped.
pub struct TempConfig {
    _dir: TempDir,
    path: PathBuf,
}

impl TempConfig {
    /// Path to a config file that does not exist yet
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("galr").join("config.toml");
        Self { _dir: dir, path }
    }

    /// Config file pre-filled with `contents`
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn with_contents(contents: &str) -> Self {
        let temp = Self::new();
        if let Some(parent) = temp.path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        fs::write(&temp.path, contents).expect("Failed to write config file");
        temp
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
