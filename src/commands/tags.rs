//! Tags command - the tag index with usage counts

use crate::{GalrError, catalog::Catalog, filter::ArchiveCategory, output};

type Result<T> = std::result::Result<T, GalrError>;

/// Execute the tags command
///
/// With a category, only the tags filed under that folder are listed.
///
/// # Errors
/// Currently infallible; the signature matches the other commands
pub fn execute(catalog: &Catalog, category: Option<ArchiveCategory>, quiet: bool) -> Result<()> {
    let counts = catalog.tag_counts();
    let tags: Vec<String> = counts.keys().cloned().collect();

    let listed: Vec<&str> = match category {
        Some(category) => category.related_tags(&tags),
        None => tags.iter().map(String::as_str).collect(),
    };

    if listed.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
        }
        return Ok(());
    }

    if !quiet {
        match category {
            Some(category) => println!("Tags in {}.collection:", category.name()),
            None => println!("Tags in catalog:"),
        }
    }
    for tag in listed {
        let count = counts.get(tag).copied().unwrap_or(0);
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
    Ok(())
}
