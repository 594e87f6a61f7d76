//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are supplied by the catalog source and never mutated by the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description shown in the detail view.
    #[serde(default)]
    pub description: String,
    /// Category name, matched exactly by the category filter.
    pub category: String,
    /// Unit price.
    pub price: Money,
    /// Display asset reference (opaque to the engine).
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Create a product with an empty description and image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            price,
            image: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Lower-cased text that free-text search runs against: name,
    /// category and description joined by single spaces.
    pub fn search_text(&self) -> String {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
