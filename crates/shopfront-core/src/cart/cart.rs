//! Cart and cart line types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity `update_quantity` allows per line.
///
/// `add` does not clamp: repeated additions may push a line above this
/// value, and only a later `update_quantity` brings it back into range.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now holds this quantity.
    Updated(u32),
    /// The requested quantity was below one, so the line was removed.
    Removed,
    /// No line for the product; nothing changed.
    NotInCart,
}

/// An ephemeral, in-memory shopping cart.
///
/// Lines keep first-added order and are unique by product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line grows by `quantity` without an upper clamp; a new
    /// line is appended at the end. A zero quantity is ignored and returns
    /// `None`.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Option<&CartLine> {
        if quantity == 0 {
            tracing::debug!(product_id = %product.id, "ignoring add of zero quantity");
            return None;
        }

        if let Some(position) = self.position(&product.id) {
            let line = &mut self.lines[position];
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(product_id = %product.id, quantity = line.quantity, "cart line increased");
            return Some(&self.lines[position]);
        }

        self.lines.push(CartLine::new(product.clone(), quantity));
        tracing::debug!(product_id = %product.id, quantity, "cart line added");
        self.lines.last()
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> Option<&CartLine> {
        self.add(product, 1)
    }

    /// Remove the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| line.product.id.as_str() != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(product_id, "cart line removed");
        }
        removed
    }

    /// Set the quantity of an existing line.
    ///
    /// Quantities below one remove the line; larger ones are clamped to
    /// [`MAX_QUANTITY_PER_ITEM`]. Unknown products are left alone.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> QuantityUpdate {
        if quantity < 1 {
            return if self.remove(product_id) {
                QuantityUpdate::Removed
            } else {
                QuantityUpdate::NotInCart
            };
        }

        let clamped = quantity.min(i64::from(MAX_QUANTITY_PER_ITEM)) as u32;
        match self.lines.iter_mut().find(|line| line.product.id.as_str() == product_id) {
            Some(line) => {
                line.quantity = clamped;
                tracing::debug!(product_id, quantity = clamped, "cart line quantity set");
                QuantityUpdate::Updated(clamped)
            }
            None => QuantityUpdate::NotInCart,
        }
    }

    /// Raise a line's quantity by one, subject to the update clamp.
    pub fn increment(&mut self, product_id: &str) -> QuantityUpdate {
        match self.get(product_id) {
            Some(line) => {
                let next = i64::from(line.quantity) + 1;
                self.update_quantity(product_id, next)
            }
            None => QuantityUpdate::NotInCart,
        }
    }

    /// Lower a line's quantity by one; a line at one is removed.
    pub fn decrement(&mut self, product_id: &str) -> QuantityUpdate {
        match self.get(product_id) {
            Some(line) => {
                let next = i64::from(line.quantity) - 1;
                self.update_quantity(product_id, next)
            }
            None => QuantityUpdate::NotInCart,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id.as_str() == product_id)
    }

    /// Check whether a product has a line.
    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Total item count (sum of quantities).
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Total price (sum of `price * quantity`).
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot of counts and totals for rendering.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            line_count: self.line_count(),
            item_count: self.total_item_count(),
            total: self.total_price(),
            lines: self
                .lines
                .iter()
                .map(|line| LineSummary {
                    product_id: line.product.id.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
        }
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| &line.product.id == product_id)
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product, as it was when first added.
    pub product: Product,
    /// Quantity, at least one.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product id this line is keyed by.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Line total (`price * quantity`).
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}
