//! Products offered by the nursery.

use serde::{Deserialize, Serialize};

/// A product as supplied by the catalog to the cart's add operation.
///
/// Only the four fields below are read; extra fields in incoming payloads
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name, unique within the catalog and the cart.
    pub name: String,
    /// Image URL shown next to the product.
    #[serde(default)]
    pub image: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Display-formatted price tag, e.g. `"$15"`.
    #[serde(default)]
    pub cost: String,
}

impl Product {
    /// Create a product with empty image and description.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            description: String::new(),
            cost: cost.into(),
        }
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
