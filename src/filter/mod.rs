//! Filter engine
//!
//! Derives the visible images from the catalog. Three stages narrow the
//! catalog in order, each keeping the relative order of what survives:
//!
//! 1. **Selector**: a pinned tag keeps records carrying exactly that tag; an
//!    archive category keeps records matching the category; otherwise all.
//! 2. **Search**: case-insensitive substring match on the title or any tag.
//! 3. **Active tags**: records must carry every active tag (AND). Skipped
//!    when a tag is pinned, since stage 1 already fixed tag membership.
//!
//! # Iterator Adapters
//!
//! [`ImageFilterExt`] exposes each stage as a method on any iterator of
//! `&ImageRecord`, so the stages read as a chain:
//!
//! ```
//! use galr::catalog::Catalog;
//! use galr::filter::{ImageFilterExt, Selector};
//!
//! let catalog = Catalog::sample();
//! let visible = catalog
//!     .iter()
//!     .narrow_by(&Selector::All)
//!     .matching_search("golden")
//!     .with_all_tags(&["nature".to_string()]);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod category;
pub mod error;

pub use category::ArchiveCategory;
pub use error::FilterError;

use crate::catalog::{Catalog, ImageRecord};
use serde::Serialize;
use std::fmt;

/// Search term and explicit tag selection
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search, empty matches everything
    pub search_term: String,
    /// Tags every visible image must carry, in the order they were added
    pub active_tags: Vec<String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither a search term nor an active tag is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.active_tags.is_empty()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Add the tag if absent, remove it if present
    ///
    /// Returns whether the tag is active afterwards.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyTag` for a blank tag.
    pub fn toggle_tag(&mut self, tag: &str) -> Result<bool, FilterError> {
        if tag.trim().is_empty() {
            return Err(FilterError::EmptyTag);
        }

        if let Some(pos) = self.active_tags.iter().position(|t| t == tag) {
            self.active_tags.remove(pos);
            Ok(false)
        } else {
            self.active_tags.push(tag.to_string());
            Ok(true)
        }
    }

    #[must_use]
    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// Reset search term and active tags
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.active_tags.clear();
    }
}

/// Browsing mode applied before search and tag filtering
///
/// At most one mode can be active, which the enum enforces by construction.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "mode", content = "value")]
pub enum Selector {
    /// No narrowing
    #[default]
    All,
    /// Images in one archive folder
    Category(ArchiveCategory),
    /// Images carrying one exact tag
    Tag(String),
}

impl Selector {
    /// Pin a single tag
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyTag` for a blank tag.
    pub fn tag(tag: impl Into<String>) -> Result<Self, FilterError> {
        let selector = Self::Tag(tag.into());
        selector.validate()?;
        Ok(selector)
    }

    /// Check a selector built from its variants directly
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyTag` if a blank tag is pinned.
    pub fn validate(&self) -> Result<(), FilterError> {
        match self {
            Self::Tag(tag) if tag.trim().is_empty() => Err(FilterError::EmptyTag),
            _ => Ok(()),
        }
    }

    /// Whether a record survives stage 1
    #[must_use]
    pub fn admits(&self, record: &ImageRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => category.matches(record),
            Self::Tag(tag) => record.has_tag(tag),
        }
    }

    /// True in selected-tag mode, where active tags do not apply
    #[must_use]
    pub const fn pins_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all images"),
            Self::Category(category) => write!(f, "{}.collection", category.name()),
            Self::Tag(tag) => write!(f, "#{tag}"),
        }
    }
}

/// Whether the title or any tag contains `term`, ignoring case
#[must_use]
pub fn matches_search(record: &ImageRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Whether the record carries every tag in `tags`
#[must_use]
pub fn has_all_tags(record: &ImageRecord, tags: &[String]) -> bool {
    tags.iter().all(|tag| record.has_tag(tag))
}

/// Extension trait adding the filter stages to iterators of records
pub trait ImageFilterExt<'a>: IntoIterator<Item = &'a ImageRecord> + Sized {
    /// Stage 1: keep records admitted by the selector
    fn narrow_by(self, selector: &Selector) -> Vec<&'a ImageRecord> {
        self.into_iter().filter(|r| selector.admits(r)).collect()
    }

    /// Stage 2: keep records whose title or tags contain `term`
    fn matching_search(self, term: &str) -> Vec<&'a ImageRecord> {
        if term.is_empty() {
            return self.into_iter().collect();
        }
        self.into_iter().filter(|r| matches_search(r, term)).collect()
    }

    /// Stage 3: keep records carrying all of `tags`
    fn with_all_tags(self, tags: &[String]) -> Vec<&'a ImageRecord> {
        self.into_iter().filter(|r| has_all_tags(r, tags)).collect()
    }
}

impl<'a, I> ImageFilterExt<'a> for I where I: IntoIterator<Item = &'a ImageRecord> {}

/// Compute the visible images for a filter state and selector
///
/// The result borrows from `catalog` and keeps catalog order. An empty
/// result is a normal outcome.
#[must_use]
pub fn visible_images<'a>(
    catalog: &'a Catalog,
    filters: &FilterState,
    selector: &Selector,
) -> Vec<&'a ImageRecord> {
    let _span = tracing::debug_span!(
        "visible_images",
        selector = %selector,
        search = %filters.search_term,
        active_tags = filters.active_tags.len()
    )
    .entered();

    let searched = catalog
        .iter()
        .narrow_by(selector)
        .matching_search(&filters.search_term);

    let visible = if selector.pins_tag() {
        searched
    } else {
        searched.with_all_tags(&filters.active_tags)
    };

    tracing::trace!(visible = visible.len(), total = catalog.len(), "filtered catalog");
    visible
}
