//! Search module.
//!
//! Category + free-text filtering over the catalog, with a memo for the
//! last computed result.

mod filter;
mod query;
mod results;

pub use filter::{filter_products, ProductFilter};
pub use query::SearchQuery;
pub use results::{FilterCache, FilteredProducts};
