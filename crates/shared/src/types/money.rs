//! Money type for whole-rupiah amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Rupiah has no minor unit in practice, so amounts are exact `i64`
//! whole-unit values; ratio math goes through `rust_decimal::Decimal`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in whole Indonesian rupiah.
///
/// Summation is exact integer arithmetic. Nets (income minus expenses,
/// value minus contributions) may be negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rupiah.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole rupiah.
    #[must_use]
    pub const fn new(rupiah: i64) -> Self {
        Self(rupiah)
    }

    /// Returns the amount in whole rupiah.
    #[must_use]
    pub const fn rupiah(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Subtracts `other` from `self`; the result may be negative.
    #[must_use]
    pub const fn subtract(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    /// Sums a sequence of amounts exactly.
    #[must_use]
    pub fn sum<I: IntoIterator<Item = Self>>(amounts: I) -> Self {
        amounts.into_iter().fold(Self::ZERO, Self::add)
    }

    /// Divides by `divisor`, rounding to the nearest rupiah (half away
    /// from zero). A non-positive divisor yields zero.
    #[must_use]
    pub fn div_round(self, divisor: i64) -> Self {
        if divisor <= 0 {
            return Self::ZERO;
        }
        let quotient = (Decimal::from(self.0) / Decimal::from(divisor))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(quotient.to_i64().unwrap_or(0))
    }

    /// Returns `self` as a percentage of `whole`, unrounded.
    ///
    /// A non-positive `whole` yields zero rather than dividing by it.
    #[must_use]
    pub fn percent_of(self, whole: Self) -> Decimal {
        if whole.0 <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.0) / Decimal::from(whole.0) * Decimal::ONE_HUNDRED
    }
}

impl From<i64> for Money {
    fn from(rupiah: i64) -> Self {
        Self(rupiah)
    }
}

impl std::fmt::Display for Money {
    /// Formats as `Rp 125.000` with dot thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        write!(f, "Rp ")?;
        let first_group = digits.len() % 3;
        let mut written = false;
        if first_group > 0 {
            write!(f, "{}", &digits[..first_group])?;
            written = true;
        }
        let mut index = first_group;
        while index < digits.len() {
            if written {
                write!(f, ".")?;
            }
            write!(f, "{}", &digits[index..index + 3])?;
            written = true;
            index += 3;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let money = Money::new(125_000);
        assert_eq!(money.rupiah(), 125_000);
    }

    #[test]
    fn test_money_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::new(10).is_zero());
    }

    #[test]
    fn test_money_is_negative() {
        assert!(!Money::new(10).is_negative());
        assert!(Money::new(-10).is_negative());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_money_sum_exact() {
        let amounts = [Money::new(1), Money::new(2), Money::new(3)];
        assert_eq!(Money::sum(amounts), Money::new(6));
    }

    #[test]
    fn test_money_subtract_may_go_negative() {
        let net = Money::new(100).subtract(Money::new(250));
        assert_eq!(net, Money::new(-150));
    }

    #[test]
    fn test_div_round_nearest() {
        assert_eq!(Money::new(10).div_round(4), Money::new(3)); // 2.5 -> 3
        assert_eq!(Money::new(10).div_round(3), Money::new(3)); // 3.33 -> 3
        assert_eq!(Money::new(11).div_round(3), Money::new(4)); // 3.67 -> 4
        assert_eq!(Money::new(10).div_round(0), Money::ZERO);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(Money::new(50).percent_of(Money::new(200)), dec!(25));
        assert_eq!(Money::new(1).percent_of(Money::new(3)) * dec!(3), dec!(100));
        assert_eq!(Money::new(50).percent_of(Money::ZERO), Decimal::ZERO);
        assert_eq!(Money::new(50).percent_of(Money::new(-10)), Decimal::ZERO);
    }

    #[test]
    fn test_display_idr_format() {
        assert_eq!(Money::new(125_000).to_string(), "Rp 125.000");
        assert_eq!(Money::new(1_000_000).to_string(), "Rp 1.000.000");
        assert_eq!(Money::new(999).to_string(), "Rp 999");
        assert_eq!(Money::new(0).to_string(), "Rp 0");
        assert_eq!(Money::new(-50_000).to_string(), "-Rp 50.000");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::new(4_500_000)).unwrap();
        assert_eq!(json, "4500000");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::new(4_500_000));
    }

    proptest! {
        /// Summation is exact for integers: no unit is ever lost, in any
        /// order, however many small amounts are added.
        #[test]
        fn prop_sum_matches_integer_sum(amounts in prop::collection::vec(0i64..1_000_000, 0..100)) {
            let expected: i64 = amounts.iter().sum();
            let total = Money::sum(amounts.iter().copied().map(Money::new));
            prop_assert_eq!(total.rupiah(), expected);
        }

        /// Sum order is irrelevant.
        #[test]
        fn prop_sum_is_commutative(amounts in prop::collection::vec(0i64..1_000_000, 0..50)) {
            let forward = Money::sum(amounts.iter().copied().map(Money::new));
            let reverse = Money::sum(amounts.iter().rev().copied().map(Money::new));
            prop_assert_eq!(forward, reverse);
        }
    }
}
