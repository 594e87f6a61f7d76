//! Navigation module.
//!
//! Shareable parameters (`category`, `product`) and the product selection
//! state machine that reads from them.

mod params;
mod selection;
mod state;

pub use params::{ParamStore, QueryParams};
pub use selection::Selection;
pub use state::{NavState, CATEGORY_PARAM, PRODUCT_PARAM};
