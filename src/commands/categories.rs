//! Categories command - the archive folders and their sizes

use crate::{
    GalrError,
    catalog::Catalog,
    filter::{self, ArchiveCategory, FilterState, Selector},
    output,
};

type Result<T> = std::result::Result<T, GalrError>;

/// Execute the categories command
///
/// # Errors
/// Currently infallible; the signature matches the other commands
pub fn execute(catalog: &Catalog, quiet: bool) -> Result<()> {
    if !quiet {
        println!("Archive folders:");
    }
    let filters = FilterState::new();
    for category in ArchiveCategory::ALL {
        let count = filter::visible_images(catalog, &filters, &Selector::Category(category)).len();
        println!("{}", output::category_line(category, count, quiet));
    }
    Ok(())
}
