//! Immutable catalog store with id lookup.

use crate::catalog::Product;
use crate::error::ShopError;
use crate::ids::ProductId;
use std::collections::HashMap;

/// The full, fully loaded product list.
///
/// Order is the order products were supplied in; the filter engine
/// preserves it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, ShopError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.id.is_empty() {
                return Err(ShopError::EmptyProductId(position));
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(ShopError::DuplicateProduct(product.id.to_string()));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products, index })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, ShopError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by id. Unknown ids yield `None`.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// Check whether a product id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct product categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}
