//! Integration tests for galr
//!
//! These tests drive the public library API end to end: loading catalogs,
//! filtering them, and walking a gallery session through its screens.

use galr::{
    ArchiveCategory, Catalog, FilterState, GallerySession, Intent, Screen, Selector,
    catalog::CatalogError,
    config::GalrConfig,
    nav::{DetailView, NavError, Pacer, Transition},
    visible_images,
};
use std::cell::Cell;
use std::fs;
use tempfile::TempDir;

fn ids(catalog: &Catalog, filters: &FilterState, selector: &Selector) -> Vec<String> {
    visible_images(catalog, filters, selector)
        .into_iter()
        .map(|r| r.id.clone())
        .collect()
}

/// Counts how often the loading phase ran
#[derive(Default)]
struct CountingPacer {
    count: Cell<usize>,
}

impl Pacer for CountingPacer {
    fn pace(&self, _transition: &Transition) {
        self.count.set(self.count.get() + 1);
    }
}

const CATALOG_FILE: &str = r#"
[[images]]
id = "a"
src = "a.jpg"
title = "Harbour at Dawn"
tags = ["ocean", "boats", "morning"]
description = "Fishing boats leaving the harbour."

[[images]]
id = "b"
src = "b.jpg"
title = "Glass Tower"
tags = ["architecture", "modern"]

[[images]]
id = "c"
src = "c.jpg"
title = "Mural"
tags = ["graffiti", "colorful", "urban"]
"#;

#[test]
fn test_catalog_file_round_trip_through_filters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, CATALOG_FILE).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("a").unwrap().title, "Harbour at Dawn");
    assert!(catalog.get("b").unwrap().description.is_empty());

    let none = FilterState::new();
    assert_eq!(
        ids(&catalog, &none, &Selector::Category(ArchiveCategory::Nature)),
        vec!["a"]
    );
    assert_eq!(
        ids(&catalog, &none, &Selector::Category(ArchiveCategory::Architecture)),
        vec!["b", "c"]
    );
    assert_eq!(
        ids(&catalog, &none, &Selector::Category(ArchiveCategory::Art)),
        vec!["c"]
    );
}

#[test]
fn test_catalog_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = Catalog::load(dir.path().join("nope.toml"));
    assert!(matches!(missing, Err(CatalogError::Io(_))));

    assert!(matches!(
        Catalog::from_toml_str("images = 3"),
        Err(CatalogError::Parse(_))
    ));
    assert!(matches!(Catalog::from_toml_str(""), Err(CatalogError::Empty)));

    let duplicated = r#"
[[images]]
id = "x"
src = "x.jpg"
title = "One"
tags = []

[[images]]
id = "x"
src = "y.jpg"
title = "Two"
tags = []
"#;
    assert!(matches!(
        Catalog::from_toml_str(duplicated),
        Err(CatalogError::DuplicateId(id)) if id == "x"
    ));
}

#[test]
fn test_sample_catalog_queries() {
    let catalog = Catalog::sample();

    let mut filters = FilterState::new();
    assert_eq!(
        ids(&catalog, &filters, &Selector::All),
        vec!["1", "2", "3", "4", "5", "6"]
    );

    filters.set_search("GOLDEN");
    assert_eq!(ids(&catalog, &filters, &Selector::All), vec!["1", "3"]);

    filters.toggle_tag("snow").unwrap();
    assert_eq!(ids(&catalog, &filters, &Selector::All), vec!["1"]);

    filters.set_search("");
    filters.toggle_tag("nature").unwrap();
    filters.toggle_tag("snow").unwrap();
    assert_eq!(ids(&catalog, &filters, &Selector::All), vec!["1", "4"]);

    let pinned = Selector::Tag("golden hour".into());
    assert_eq!(ids(&catalog, &filters, &pinned), vec!["1", "3"]);
}

#[test]
fn test_full_browsing_walk() {
    let catalog = Catalog::sample();
    let pacer = CountingPacer::default();
    let mut session = GallerySession::new(&catalog).with_pacer(&pacer);

    assert_eq!(session.screen(), &Screen::MainMenu);

    session
        .dispatch(Intent::SelectCategory(ArchiveCategory::Nature))
        .unwrap();
    assert_eq!(session.screen(), &Screen::Gallery);
    assert_eq!(session.gallery_view().summary().to_string(), "Showing 3 of 6 images");

    session.dispatch(Intent::SetSearch("forest".into())).unwrap();
    let visible: Vec<&str> = session.visible().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(visible, vec!["4"]);

    session.dispatch(Intent::OpenImage("4".into())).unwrap();
    let Some(DetailView::Found(record)) = session.detail() else {
        panic!("Expected image 4 to be found");
    };
    assert_eq!(record.title, "Mystical Forest");

    session.dispatch(Intent::Back).unwrap();
    assert_eq!(
        session.selector(),
        &Selector::Category(ArchiveCategory::Nature)
    );
    assert_eq!(session.filters().search_term, "forest");

    session.dispatch(Intent::OpenImage("4".into())).unwrap();
    session.dispatch(Intent::TagClick("trees".into())).unwrap();
    assert_eq!(session.selector(), &Selector::Tag("trees".into()));
    assert!(session.filters().is_empty());

    assert!(matches!(
        session.dispatch(Intent::ToggleTag("green".into())),
        Err(NavError::TagPinned(tag)) if tag == "trees"
    ));

    session.dispatch(Intent::ShowAll).unwrap();
    assert_eq!(session.visible().len(), 6);

    session.dispatch(Intent::BackToMainMenu).unwrap();
    assert_eq!(session.screen(), &Screen::MainMenu);

    // select, open, back, open, tag click, show all, main menu
    assert_eq!(pacer.count.get(), 7);
}

#[test]
fn test_deep_link_to_missing_image() {
    let catalog = Catalog::sample();
    let mut session = GallerySession::open_at(&catalog, "42");

    assert_eq!(session.detail(), Some(DetailView::NotFound("42".into())));
    assert!(!session.has_return_context());

    session.dispatch(Intent::Back).unwrap();
    assert_eq!(session.screen(), &Screen::Gallery);
    assert!(session.context().is_cleared());
}

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("galr").join("config.toml");

    let mut config = GalrConfig::default();
    config.set("transition_delay_ms", "0").unwrap();
    config.set("catalog", "gallery.toml").unwrap();
    config.save_to(&path).unwrap();

    let loaded = GalrConfig::load_from(&path).unwrap();
    assert_eq!(loaded.transition_delay_ms, 0);
    assert_eq!(loaded.get("catalog").unwrap(), "gallery.toml");
    assert!(loaded.transition_delay().is_zero());
}

#[test]
fn test_catalog_file_tags_are_lowercased_on_load() {
    let catalog = Catalog::from_toml_str(
        r#"
[[images]]
id = "p"
src = "p.jpg"
title = "Ridge"
tags = ["Nature", "Mountains"]
"#,
    )
    .unwrap();
    let none = FilterState::new();

    assert_eq!(
        ids(&catalog, &none, &Selector::Category(ArchiveCategory::Nature)),
        vec!["p"]
    );
    assert_eq!(ids(&catalog, &none, &Selector::tag("nature").unwrap()), vec!["p"]);

    let mut session = GallerySession::open_at(&catalog, "p");
    session.dispatch(Intent::TagClick("mountains".into())).unwrap();
    assert_eq!(session.visible().len(), 1);
}
