//! Product catalog grouped by category.
//!
//! The catalog is the upstream source of the products passed to the cart's
//! add operation. It is read from JSON:
//!
//! ```json
//! [
//!   { "category": "Air Purifying Plants",
//!     "plants": [ { "name": "Snake Plant", "image": "...", "description": "...", "cost": "$15" } ] }
//! ]
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::price::parse_numeric;
use super::product::Product;

/// Errors that can occur when parsing or validating a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The input is not valid catalog JSON.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The catalog failed validation.
    #[error("catalog has {} problem(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// A named group of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category heading.
    pub category: String,
    /// Products in display order.
    pub plants: Vec<Product>,
}

/// The full product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from categories.
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse and validate a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] on malformed input and
    /// [`CatalogError::Invalid`] if [`Catalog::validate`] reports problems.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        let problems = catalog.validate();
        if problems.is_empty() {
            Ok(catalog)
        } else {
            Err(CatalogError::Invalid(problems))
        }
    }

    /// Check the catalog for problems that would break the cart.
    ///
    /// Reports empty product names, names repeated across the catalog (the
    /// cart keys line items by name), and price tags that parse to zero.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for category in &self.categories {
            for product in &category.plants {
                if product.name.trim().is_empty() {
                    problems.push(format!(
                        "product with empty name in category '{}'",
                        category.category
                    ));
                    continue;
                }
                if !seen.insert(product.name.as_str()) {
                    problems.push(format!("duplicate product name '{}'", product.name));
                }
                if parse_numeric(&product.cost).is_zero() {
                    problems.push(format!(
                        "product '{}' has no usable price in '{}'",
                        product.name, product.cost
                    ));
                }
            }
        }

        problems
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Iterate over every product in the catalog.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.plants.iter())
    }

    /// Look up a product by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products().find(|p| p.name == name)
    }

    /// Total number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.plants.len()).sum()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"category": "Aromatic", "plants": [
            {"name": "Lavender", "image": "lavender.jpg", "description": "Calming", "cost": "$20"},
            {"name": "Mint", "image": "mint.jpg", "description": "Fresh", "cost": "$12"}
        ]},
        {"category": "Medicinal", "plants": [
            {"name": "Aloe Vera", "image": "aloe.jpg", "description": "Soothing", "cost": "$15"}
        ]}
    ]"#;

    #[test]
    fn test_from_json_valid() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let aloe = catalog.find("Aloe Vera").unwrap();
        assert_eq!(aloe.cost, "$15");
        assert!(catalog.find("Cactus").is_none());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_validate_duplicate_names() {
        let catalog = Catalog::new(vec![
            Category {
                category: "A".to_string(),
                plants: vec![Product::new("Mint", "$1")],
            },
            Category {
                category: "B".to_string(),
                plants: vec![Product::new("Mint", "$2")],
            },
        ]);

        let problems = catalog.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("duplicate"));
    }

    #[test]
    fn test_validate_empty_name_and_zero_price() {
        let catalog = Catalog::new(vec![Category {
            category: "A".to_string(),
            plants: vec![Product::new("  ", "$1"), Product::new("Fern", "free")],
        }]);

        let problems = catalog.validate();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_invalid_catalog() {
        let json = r#"[{"category": "A", "plants": [{"name": "Fern", "cost": "n/a"}]}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ref p) if p.len() == 1));
        assert!(err.to_string().contains("Fern"));
    }
}
