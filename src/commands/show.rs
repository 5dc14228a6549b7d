//! Show command - detail view of one image

use crate::{GalrError, catalog::Catalog, nav::DetailView, output};

type Result<T> = std::result::Result<T, GalrError>;

/// Execute the show command
///
/// An unknown id prints the not-found view. In JSON mode it is an error
/// instead, so the exit status tells scripts the id was missing.
///
/// # Errors
/// Returns `CatalogError::NotFound` for unknown ids in JSON mode, or a
/// serialization error
pub fn execute(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    if json {
        let record = catalog.lookup(id)?;
        println!("{}", output::to_json(record)?);
        return Ok(());
    }

    println!("{}", output::detail(&DetailView::resolve(catalog, id)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::testing::sample_catalog;

    #[test]
    fn test_json_unknown_id_is_not_found() {
        let catalog = sample_catalog();
        match execute(&catalog, "99", true) {
            Err(GalrError::CatalogError(CatalogError::NotFound(id))) => assert_eq!(id, "99"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_id_renders_not_found_view() {
        let catalog = sample_catalog();
        assert!(execute(&catalog, "99", false).is_ok());
        assert!(execute(&catalog, "2", true).is_ok());
    }
}
