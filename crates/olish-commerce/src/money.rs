//! Money type for representing prices and totals.
//!
//! Amounts are held in minor units (paise) so cart totals accumulate
//! exactly. The storefront sells in a single currency, Sri Lankan rupees,
//! displayed as `Rs.1390.00`.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "Rs.";

/// Minor units per major unit.
const MINOR_PER_MAJOR: u64 = 100;

/// A non-negative amount of money in minor units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    amount_minor: u64,
}

impl Money {
    /// Zero rupees.
    pub const ZERO: Money = Money { amount_minor: 0 };

    /// Create a value from minor units (paise).
    pub const fn from_minor(amount_minor: u64) -> Self {
        Self { amount_minor }
    }

    /// Create a value from a decimal rupee amount, rounded to the nearest paisa.
    ///
    /// ```
    /// use olish_commerce::money::Money;
    /// let price = Money::from_decimal(1390.0).unwrap();
    /// assert_eq!(price.amount_minor(), 139_000);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        let minor = (amount * MINOR_PER_MAJOR as f64).round();
        if minor > u64::MAX as f64 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::from_minor(minor as u64))
    }

    /// Amount in minor units.
    pub const fn amount_minor(&self) -> u64 {
        self.amount_minor
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal rupee value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / MINOR_PER_MAJOR as f64
    }

    /// Add, saturating at the largest representable amount.
    pub const fn saturating_add(self, other: Money) -> Money {
        Money::from_minor(self.amount_minor.saturating_add(other.amount_minor))
    }

    /// Multiply by a quantity, saturating at the largest representable amount.
    pub const fn saturating_mul(self, quantity: u32) -> Money {
        Money::from_minor(self.amount_minor.saturating_mul(quantity as u64))
    }

    /// Format as a display string (e.g. "Rs.1390.00").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without the symbol (e.g. "1390.00").
    pub fn display_amount(&self) -> String {
        format!(
            "{}.{:02}",
            self.amount_minor / MINOR_PER_MAJOR,
            self.amount_minor % MINOR_PER_MAJOR
        )
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(1390.0).unwrap();
        assert_eq!(m.amount_minor(), 139_000);

        let m = Money::from_decimal(49.99).unwrap();
        assert_eq!(m.amount_minor(), 4999);

        // 0.1 + 0.2 style inputs still land on whole paise
        let m = Money::from_decimal(0.3).unwrap();
        assert_eq!(m.amount_minor(), 30);
    }

    #[test]
    fn test_money_rejects_bad_decimals() {
        assert!(matches!(
            Money::from_decimal(-1.0),
            Err(CommerceError::InvalidPrice(_))
        ));
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(f64::INFINITY).is_err());
        assert!(Money::from_decimal(1e30).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(139_000).display(), "Rs.1390.00");
        assert_eq!(Money::from_minor(5).display(), "Rs.0.05");
        assert_eq!(Money::ZERO.to_string(), "Rs.0.00");
        assert_eq!(Money::from_minor(199_050).display_amount(), "1990.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let price = Money::from_minor(139_000);
        assert_eq!(price.saturating_mul(2).amount_minor(), 278_000);
        assert_eq!(
            (price + Money::from_minor(199_000)).amount_minor(),
            338_000
        );

        let total: Money = [price, price, Money::ZERO].into_iter().sum();
        assert_eq!(total.amount_minor(), 278_000);
    }

    #[test]
    fn test_money_saturates() {
        let max = Money::from_minor(u64::MAX);
        assert_eq!(max.saturating_mul(2), max);
        assert_eq!(max + Money::from_minor(1), max);
    }

    #[test]
    fn test_to_decimal() {
        assert!((Money::from_minor(4999).to_decimal() - 49.99).abs() < 0.001);
    }
}
