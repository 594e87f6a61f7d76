//! Shopping cart module.
//!
//! Contains the cart, its lines, and the totals snapshot.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, QuantityUpdate, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartSummary, LineSummary};
