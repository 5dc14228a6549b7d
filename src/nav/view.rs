//! Read-only views handed to the renderer

use crate::catalog::{Catalog, ImageRecord};
use crate::filter::{ArchiveCategory, FilterState, Selector};
use std::fmt;

/// Outcome of looking up the image shown on a detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    Found(&'a ImageRecord),
    /// The id is not in the catalog
    NotFound(String),
}

impl<'a> DetailView<'a> {
    #[must_use]
    pub fn resolve(catalog: &'a Catalog, id: &str) -> Self {
        catalog
            .get(id)
            .map_or_else(|| Self::NotFound(id.to_string()), Self::Found)
    }

    #[must_use]
    pub const fn record(&self) -> Option<&'a ImageRecord> {
        match self {
            Self::Found(record) => Some(*record),
            Self::NotFound(_) => None,
        }
    }
}

/// Filtered listing for the gallery screen
#[derive(Debug, Clone)]
pub struct GalleryView<'a> {
    pub images: Vec<&'a ImageRecord>,
    pub total: usize,
    pub selector: Selector,
    pub filters: FilterState,
}

impl GalleryView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.images.len(),
            total: self.total,
        }
    }
}

/// "Showing N of M images"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} images", self.shown, self.total)
    }
}

/// One archive folder with the catalog tags filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarFolder {
    pub category: ArchiveCategory,
    pub tags: Vec<String>,
}

/// Folder tree and flat tag list shown next to the gallery and detail screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub folders: Vec<SidebarFolder>,
    pub all_tags: Vec<String>,
}

impl Sidebar {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let all_tags = catalog.all_tags();
        let folders = ArchiveCategory::ALL
            .into_iter()
            .map(|category| SidebarFolder {
                category,
                tags: category
                    .related_tags(&all_tags)
                    .into_iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect();

        Self { folders, all_tags }
    }

    #[must_use]
    pub fn folder(&self, category: ArchiveCategory) -> Option<&SidebarFolder> {
        self.folders.iter().find(|f| f.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_detail_view_resolve() {
        let catalog = sample_catalog();
        let found = DetailView::resolve(&catalog, "5");
        assert_eq!(found.record().map(|r| r.title.as_str()), Some("Modern Minimalism"));

        let missing = DetailView::resolve(&catalog, "nope");
        assert_eq!(missing, DetailView::NotFound("nope".into()));
        assert!(missing.record().is_none());
    }

    #[test]
    fn test_summary_display() {
        let summary = ResultSummary { shown: 2, total: 6 };
        assert_eq!(summary.to_string(), "Showing 2 of 6 images");
    }

    #[test]
    fn test_sidebar_folders() {
        let sidebar = Sidebar::from_catalog(&sample_catalog());

        let nature = sidebar.folder(ArchiveCategory::Nature).unwrap();
        assert_eq!(
            nature.tags,
            vec!["forest", "landscape", "mountains", "nature", "ocean", "trees", "water"]
        );

        let art = sidebar.folder(ArchiveCategory::Art).unwrap();
        assert_eq!(
            art.tags,
            vec!["abstract", "art", "colorful", "geometric", "graffiti", "street art"]
        );

        let architecture = sidebar.folder(ArchiveCategory::Architecture).unwrap();
        assert_eq!(
            architecture.tags,
            vec!["architecture", "design", "minimalist", "modern", "urban"]
        );

        assert_eq!(sidebar.all_tags.len(), 26);
    }
}
