//! Cart totals snapshot.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Counts and totals for a cart, computed from its current lines.
///
/// A snapshot for rendering; the cart itself stays the only source of
/// truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Number of distinct products.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
}

impl CartSummary {
    /// Check if the summarized cart was empty.
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// Badge text for the cart button; empty when there is nothing to show.
    pub fn badge(&self) -> String {
        match self.item_count {
            0 => String::new(),
            n => n.to_string(),
        }
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Product the line is for.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge() {
        let summary = CartSummary {
            line_count: 1,
            item_count: 3,
            total: Money::new(26700),
            lines: vec![LineSummary {
                product_id: ProductId::new("p1"),
                unit_price: Money::new(8900),
                quantity: 3,
                subtotal: Money::new(26700),
            }],
        };
        assert_eq!(summary.badge(), "3");
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_empty_badge() {
        let summary = CartSummary {
            line_count: 0,
            item_count: 0,
            total: Money::zero(),
            lines: vec![],
        };
        assert_eq!(summary.badge(), "");
        assert!(summary.is_empty());
    }
}
