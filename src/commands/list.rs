//! List command - print the images visible under a query

use crate::{
    GalrError,
    catalog::Catalog,
    cli::ListArgs,
    filter,
    nav::ResultSummary,
    output::{self, Listing},
};

type Result<T> = std::result::Result<T, GalrError>;

/// Execute the list command
///
/// # Errors
/// Returns an error if the query arguments are invalid or JSON output fails
pub fn execute(catalog: &Catalog, args: &ListArgs, quiet: bool) -> Result<()> {
    for line in render(catalog, args, quiet)? {
        println!("{line}");
    }
    Ok(())
}

fn render(catalog: &Catalog, args: &ListArgs, quiet: bool) -> Result<Vec<String>> {
    let (filters, selector) = args.query()?;
    let images = filter::visible_images(catalog, &filters, &selector);

    if args.json {
        let listing = Listing {
            selector: &selector,
            filters: &filters,
            shown: images.len(),
            total: catalog.len(),
            images: &images,
        };
        return Ok(vec![output::to_json(&listing)?]);
    }

    if images.is_empty() {
        if quiet {
            return Ok(Vec::new());
        }
        return Ok(vec![
            output::NO_MATCHES.to_string(),
            output::NO_MATCHES_HINT.to_string(),
        ]);
    }

    let mut lines = Vec::new();
    if !quiet {
        lines.push(output::context_line(&selector, &filters));
        lines.push(output::summary_line(ResultSummary {
            shown: images.len(),
            total: catalog.len(),
        }));
    }
    lines.extend(images.into_iter().map(|record| output::image_line(record, quiet)));
    Ok(lines)
}
