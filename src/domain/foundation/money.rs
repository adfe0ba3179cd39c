//! Money value object backed by exact decimal arithmetic.
//!
//! All monetary fields in the domain use this type. Floating point is never
//! used for money; every operation stays on `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Non-negative monetary amount.
///
/// # Invariants
///
/// - The inner decimal is never negative.
/// - Arithmetic helpers either preserve non-negativity (`plus`, `times`)
///   or make failure explicit (`minus` returns `None` on underflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Creates a Money value, rejecting negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() {
            return Err(ValidationError::invalid_format(
                "amount",
                format!("monetary amount cannot be negative, got {}", amount),
            ));
        }
        Ok(Self(amount))
    }

    /// Creates a Money value from whole currency units.
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the inner decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// True if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds another amount.
    pub fn plus(&self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    /// Subtracts another amount, or `None` if the result would be negative.
    pub fn minus(&self, other: Money) -> Option<Money> {
        let result = self.0 - other.0;
        if result.is_sign_negative() {
            None
        } else {
            Some(Money(result))
        }
    }

    /// Multiplies by a whole number of installments.
    pub fn times(&self, n: u32) -> Money {
        Money(self.0 * Decimal::from(n))
    }

    /// Number of whole installments of the given size contained in this amount.
    ///
    /// Returns 0 when `installment` is zero rather than dividing by zero.
    pub fn whole_installments_of(&self, installment: Money) -> u32 {
        if installment.is_zero() {
            return 0;
        }
        use rust_decimal::prelude::ToPrimitive;
        let quotient = (self.0 / installment.0).floor();
        // Counters in this domain are small (months within a plan duration),
        // so a saturating narrow is safe.
        quotient.to_u32().unwrap_or(u32::MAX)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative_amounts() {
        assert!(Money::new(dec!(-0.01)).is_err());
        assert!(Money::new(dec!(0)).is_ok());
    }

    #[test]
    fn plus_and_times_are_exact() {
        let m = Money::new(dec!(500)).unwrap();
        assert_eq!(m.plus(m).amount(), dec!(1000));
        assert_eq!(m.times(11).amount(), dec!(5500));
    }

    #[test]
    fn minus_underflow_is_none() {
        let small = Money::new(dec!(100)).unwrap();
        let big = Money::new(dec!(700)).unwrap();
        assert!(small.minus(big).is_none());
        assert_eq!(big.minus(small).unwrap().amount(), dec!(600));
    }

    #[test]
    fn whole_installments_floor_division() {
        let installment = Money::new(dec!(500)).unwrap();
        assert_eq!(Money::new(dec!(700)).unwrap().whole_installments_of(installment), 1);
        assert_eq!(Money::new(dec!(499.99)).unwrap().whole_installments_of(installment), 0);
        assert_eq!(Money::new(dec!(1500)).unwrap().whole_installments_of(installment), 3);
    }

    #[test]
    fn whole_installments_of_zero_is_zero() {
        let amount = Money::new(dec!(700)).unwrap();
        assert_eq!(amount.whole_installments_of(Money::zero()), 0);
    }

    #[test]
    fn display_uses_two_decimal_places() {
        assert_eq!(Money::new(dec!(500)).unwrap().to_string(), "500.00");
    }
}
