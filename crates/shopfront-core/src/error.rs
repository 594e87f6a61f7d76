//! Shopfront error types.
//!
//! Engine operations (filtering, cart mutation, selection) never fail.
//! These errors only come from loading the external catalog and from
//! converting raw amounts into [`Money`](crate::money::Money).

use thiserror::Error;

/// Errors raised while loading or validating catalog data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShopError {
    /// Two catalog entries share the same product id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A catalog entry has an empty id.
    #[error("Product id must not be empty (entry {0})")]
    EmptyProductId(usize),

    /// A price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Catalog data could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ShopError {
    fn from(e: serde_json::Error) -> Self {
        ShopError::SerializationError(e.to_string())
    }
}
