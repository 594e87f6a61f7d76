//! Product catalog module.
//!
//! Contains the product type, category filter values and the read-only
//! catalog store.

mod category;
mod product;
mod store;

pub use category::{CategoryFilter, ALL_CATEGORIES, STANDARD_CATEGORIES};
pub use product::Product;
pub use store::Catalog;
