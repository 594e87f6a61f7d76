//! Money type for representing prices and cart totals.
//!
//! Uses cents-based integer representation so that `price * quantity`
//! sums stay exact. Catalog files carry plain decimal numbers; the serde
//! impls convert at the boundary.

use crate::error::ShopError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Number of minor units in one major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A non-negative amount in the storefront's single unit currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use shopfront_core::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Multiply by a quantity, saturating instead of overflowing.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money::new(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl TryFrom<f64> for Money {
    type Error = ShopError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ShopError::InvalidPrice(amount.to_string()));
        }
        Ok(Money::from_decimal(amount))
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.to_decimal()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(89.0).amount_cents, 8900);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(8900).display(), "$89.00");
        assert_eq!(Money::new(4999).to_string(), "$49.99");
        assert_eq!(Money::new(5).display_amount(), "0.05");
    }

    #[test]
    fn test_money_multiply_and_sum() {
        let lamp = Money::new(8900);
        let pillow = Money::new(4500);
        let total: Money = [lamp * 2, pillow * 3].into_iter().sum();
        assert_eq!(total.amount_cents, 17800 + 13500);
    }

    #[test]
    fn test_money_multiply_saturates() {
        let m = Money::new(i64::MAX / 2);
        assert_eq!(m.multiply(u32::MAX).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_rejects_negative_and_nan() {
        assert!(Money::try_from(-1.0).is_err());
        assert!(Money::try_from(f64::NAN).is_err());
        assert!(Money::try_from(f64::INFINITY).is_err());
        assert_eq!(Money::try_from(34.0).unwrap().amount_cents, 3400);
    }

    #[test]
    fn test_money_serde_as_decimal() {
        let m: Money = serde_json::from_str("65").unwrap();
        assert_eq!(m.amount_cents, 6500);
        assert_eq!(serde_json::to_string(&Money::new(3450)).unwrap(), "34.5");
        assert!(serde_json::from_str::<Money>("-3").is_err());
    }
}
