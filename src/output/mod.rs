//! Output formatting for CLI display
//!
//! This module turns records and views into terminal text. Quiet mode
//! strips decoration down to one machine-friendly token per line.

use crate::catalog::ImageRecord;
use crate::filter::{ArchiveCategory, FilterState, Selector};
use crate::nav::{DetailView, ResultSummary};
use colored::Colorize;
use serde::Serialize;

/// Shown when filtering leaves nothing
pub const NO_MATCHES: &str = "No images match your current filters.";

/// Hint printed under [`NO_MATCHES`]
pub const NO_MATCHES_HINT: &str = "Try adjusting your search or removing some tags.";

/// Shown for a detail screen whose id is not in the catalog
pub const NOT_FOUND: &str = "Image not found";

/// Format tags as `#tag` badges
#[must_use]
pub fn tag_badges(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}").cyan().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one gallery entry
#[must_use]
pub fn image_line(record: &ImageRecord, quiet: bool) -> String {
    if quiet {
        return record.id.clone();
    }
    format!(
        "  {} {}  {}",
        format!("[{}]", record.id).dimmed(),
        record.title.bold(),
        tag_badges(&record.tags)
    )
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} image(s))")
    }
}

/// Format an archive folder with the number of images it holds
#[must_use]
pub fn category_line(category: ArchiveCategory, count: usize, quiet: bool) -> String {
    if quiet {
        category.name().to_string()
    } else {
        format!(
            "  {}  {} image(s)",
            format!("{}.collection", category.name()).bold(),
            count
        )
    }
}

/// Describe what the gallery is currently narrowed to
#[must_use]
pub fn context_line(selector: &Selector, filters: &FilterState) -> String {
    let mut parts = vec![format!("Browsing {selector}")];
    if !filters.search_term.is_empty() {
        parts.push(format!("search \"{}\"", filters.search_term));
    }
    if !filters.active_tags.is_empty() {
        parts.push(format!("tags: {}", filters.active_tags.join(", ")));
    }
    parts.join(" | ")
}

#[must_use]
pub fn summary_line(summary: ResultSummary) -> String {
    summary.to_string().dimmed().to_string()
}

/// Multi-line rendering of a detail screen
#[must_use]
pub fn detail(view: &DetailView<'_>) -> String {
    match view {
        DetailView::Found(record) => {
            let mut lines = vec![
                record.title.bold().to_string(),
                String::new(),
                record.description.clone(),
            ];
            if !record.alt.is_empty() {
                lines.push(format!("{} {}", "alt:".dimmed(), record.alt));
            }
            lines.push(format!("{} {}", "src:".dimmed(), record.src));
            lines.push(String::new());
            lines.push(format!("{} {}", "TAGS".dimmed(), tag_badges(&record.tags)));
            lines.join("\n")
        }
        DetailView::NotFound(id) => format!("{} ({})", NOT_FOUND.red(), id),
    }
}

/// A filtered listing with the query that produced it, for `list --json`
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub selector: &'a Selector,
    pub filters: &'a FilterState,
    pub shown: usize,
    pub total: usize,
    pub images: &'a [&'a ImageRecord],
}

/// Pretty JSON for `--json` output
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_image_line_quiet_is_id() {
        let catalog = sample_catalog();
        let record = catalog.lookup("2").unwrap();
        assert_eq!(image_line(record, true), "2");
    }

    #[test]
    fn test_image_line_contains_title_and_tags() {
        let catalog = sample_catalog();
        let line = image_line(catalog.lookup("6").unwrap(), false);
        assert!(line.contains("Urban Expression"));
        assert!(line.contains("#street art"));
        assert!(line.contains("#graffiti"));
    }

    #[test]
    fn test_tag_with_count() {
        assert_eq!(tag_with_count("ocean", 1, true), "ocean");
        assert_eq!(tag_with_count("ocean", 1, false), "  ocean (used by 1 image(s))");
    }

    #[test]
    fn test_context_line() {
        let mut filters = FilterState::new();
        assert_eq!(context_line(&Selector::All, &filters), "Browsing all images");

        filters.set_search("sun");
        filters.toggle_tag("nature").unwrap();
        filters.toggle_tag("green").unwrap();
        assert_eq!(
            context_line(&Selector::Category(ArchiveCategory::Nature), &filters),
            "Browsing nature.collection | search \"sun\" | tags: nature, green"
        );
        assert_eq!(
            context_line(&Selector::Tag("ocean".into()), &FilterState::new()),
            "Browsing #ocean"
        );
    }

    #[test]
    fn test_detail_found_and_missing() {
        let catalog = sample_catalog();
        let text = detail(&DetailView::resolve(&catalog, "4"));
        assert!(text.contains("Mystical Forest"));
        assert!(text.contains("Sunlight filters through dense forest canopy"));
        assert!(text.contains("#trees"));

        let text = detail(&DetailView::resolve(&catalog, "99"));
        assert!(text.contains(NOT_FOUND));
        assert!(text.contains("99"));
    }

    #[test]
    fn test_listing_json_shape() {
        let catalog = sample_catalog();
        let mut filters = FilterState::new();
        filters.toggle_tag("nature").unwrap();
        let selector = Selector::Category(ArchiveCategory::Nature);
        let images = crate::filter::visible_images(&catalog, &filters, &selector);

        let json = to_json(&Listing {
            selector: &selector,
            filters: &filters,
            shown: images.len(),
            total: catalog.len(),
            images: &images,
        })
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["selector"]["mode"], "category");
        assert_eq!(parsed["selector"]["value"], "nature");
        assert_eq!(parsed["filters"]["active_tags"][0], "nature");
        assert_eq!(parsed["shown"], 2);
        assert_eq!(parsed["total"], 6);
        assert_eq!(parsed["images"][1]["id"], "4");

        let all = to_json(&Selector::All).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&all).unwrap();
        assert_eq!(parsed["mode"], "all");
    }

    #[test]
    fn test_to_json() {
        let catalog = sample_catalog();
        let json = to_json(&[catalog.lookup("1").unwrap()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["title"], "Alpine Peak Serenity");
        assert_eq!(parsed[0]["tags"][1], "mountains");
    }
}
