//! Image catalog
//!
//! The catalog is the fixed, ordered list of images galr browses. It is built
//! once at startup, either from the built-in sample data or from a TOML
//! catalog file, and is never mutated afterwards. Every query in the crate
//! borrows records from it, so filtering never copies or reorders images.
//!
//! # Catalog files
//!
//! ```toml
//! [[images]]
//! id = "1"
//! src = "assets/mountain-landscape.jpg"
//! title = "Alpine Peak Serenity"
//! tags = ["nature", "mountains"]
//! alt = "Mountain landscape"
//! description = "Snow-capped peaks at golden hour."
//! ```

mod data;
pub mod error;

pub use data::sample_records;
pub use error::CatalogError;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// A single image and its tags
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    /// Opaque asset reference, never resolved by galr
    pub src: String,
    pub title: String,
    /// Lowercase keywords in the order they were written
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub description: String,
}

impl ImageRecord {
    /// Create a record with empty alt text and description
    #[must_use]
    pub fn new(id: &str, src: &str, title: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            src: src.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            alt: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt = alt.to_string();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn normalize_tags(&mut self) -> Result<(), CatalogError> {
        for tag in &mut self.tags {
            let normalized = tag.trim().to_lowercase();
            if normalized.is_empty() {
                return Err(CatalogError::InvalidTag {
                    id: self.id.clone(),
                    tag: tag.clone(),
                });
            }
            *tag = normalized;
        }
        Ok(())
    }

    /// Exact membership check against this record's tags
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// On-disk shape of a catalog file
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    images: Vec<ImageRecord>,
}

/// Ordered, immutable collection of images
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ImageRecord>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Tags are trimmed and lowercased so category and tag matching stay exact.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if `records` is empty,
    /// `CatalogError::DuplicateId` if two records share an id and
    /// `CatalogError::InvalidTag` for blank tags.
    pub fn from_records(mut records: Vec<ImageRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for record in &mut records {
            if !seen.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            record.normalize_tags()?;
        }

        Ok(Self { records })
    }

    /// The built-in six image catalog
    #[must_use]
    pub fn sample() -> Self {
        Self {
            records: sample_records(),
        }
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML and the validation
    /// errors of [`Catalog::from_records`].
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_records(file.images)
    }

    /// Load a catalog file from disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), images = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    /// Records in catalog order
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Find a record by id, treating a miss as an error
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record has this id.
    pub fn lookup(&self, id: &str) -> Result<&ImageRecord, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Every distinct tag, sorted ascending
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        self.tag_counts().into_keys().collect()
    }

    /// Number of images carrying each tag, keyed in ascending tag order
    ///
    /// A tag repeated inside one record counts that record once.
    #[must_use]
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            let unique: HashSet<&String> = record.tags.iter().collect();
            for tag in unique {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
