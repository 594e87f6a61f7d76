//! Catalog filtering, cart and selection state engine for Shopfront.
//!
//! This crate holds the logic behind a browsable product catalog with a
//! client-side cart:
//!
//! - **Catalog**: immutable product list with id lookup
//! - **Search**: category + multi-term text filtering, memoized
//! - **Cart**: lines unique by product, quantity rules, totals
//! - **Navigation**: shareable `category`/`product` parameters and the
//!   open-product selection
//! - **Storefront**: the explicit state object a view layer drives
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shopfront_core::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("p1", "Minimal Desk Lamp", "Lighting", Money::new(8900)),
//!     Product::new("p2", "Ceramic Coffee Set", "Kitchenware", Money::new(6500)),
//! ])
//! .unwrap();
//!
//! let mut shop = Storefront::new(Arc::new(catalog));
//! shop.set_search("lamp");
//! assert_eq!(shop.filtered_products().len(), 1);
//!
//! shop.add_by_id("p1", 2);
//! assert_eq!(shop.cart_total_item_count(), 2);
//! assert_eq!(shop.cart_total_price().display(), "$178.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod search;
pub mod storefront;

pub use error::ShopError;
pub use ids::ProductId;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShopError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, Product, STANDARD_CATEGORIES};

    // Search
    pub use crate::search::{filter_products, FilteredProducts, ProductFilter, SearchQuery};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, QuantityUpdate, MAX_QUANTITY_PER_ITEM};

    // Navigation
    pub use crate::navigation::{NavState, ParamStore, QueryParams, Selection};

    pub use crate::storefront::Storefront;
}
