//! Product catalog loading.
//!
//! The catalog comes from `STOREFRONT_CATALOG_PATH` when set, otherwise from
//! the catalog compiled into the binary (`catalog/plants.json`).

use std::path::Path;

use paradise_nursery_core::{Catalog, CatalogError};
use thiserror::Error;

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../catalog/plants.json");

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load the catalog from a file, or the built-in catalog when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the catalog is invalid.
pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let catalog = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Catalog::from_json(&json)?
        }
        None => builtin()?,
    };

    tracing::info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        source = path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
        "Catalog loaded"
    );

    Ok(catalog)
}

/// Parse the built-in catalog.
///
/// # Errors
///
/// Returns an error if the built-in catalog is invalid.
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::from_json(BUILTIN_CATALOG)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin().unwrap();
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.len(), 9);
        assert!(catalog.find("Aloe Vera").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some(Path::new("/nonexistent/catalog.json"))).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn test_load_builtin() {
        assert!(load(None).is_ok());
    }
}
