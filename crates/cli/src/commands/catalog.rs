//! Catalog validation.

use std::path::Path;

use paradise_nursery_core::{Catalog, CatalogError};
use tracing::{error, info};

/// Validate the catalog at `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not catalog JSON, or has
/// validation problems.
pub async fn check(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Checking catalog");
    let content = tokio::fs::read_to_string(path).await?;

    match Catalog::from_json(&content) {
        Ok(catalog) => {
            info!(
                categories = catalog.categories().len(),
                products = catalog.len(),
                "Catalog is valid"
            );
            Ok(())
        }
        Err(CatalogError::Invalid(problems)) => {
            error!("Catalog validation failed:");
            for problem in &problems {
                error!("  - {problem}");
            }
            Err(format!("{} validation errors found", problems.len()).into())
        }
        Err(e) => Err(e.into()),
    }
}
