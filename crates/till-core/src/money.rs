//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    1.99 + 2.00 + 1.99 = 5.9799999999999995                             │
//! │    "Total expected: $5.9799999999999995"  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    199 + 200 + 199 = 598 cents                                         │
//! │    "Total expected: $5.98"                ✅                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let toothbrush = Money::from_cents(199);
//! let floss = Money::from_cents(200);
//!
//! let total: Money = [toothbrush, floss, toothbrush].into_iter().sum();
//! assert_eq!(total.to_string(), "$5.98");
//! ```
//!
//! ## Display
//! Always two decimal places: a total of three and a half dollars prints as
//! `$3.50`, not the plain-number `$3.5`.
//!
//! ## Overflow
//! Addition and subtraction saturate at the `i64` bounds instead of
//! wrapping or panicking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: a discount larger than its price yields a negative line
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Item.price_cents ──► Item::net() ──► Receipt.total ──► "Total expected: $5.98"
///                        ▲
/// Item.discount_cents ───┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(199); // $1.99
    /// assert_eq!(price.cents(), 199);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, negative amounts as `-$D.CC`.
///
/// This is the exact format of the "Total expected" summary line. Cents are
/// always zero-padded to two digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(199);
        assert_eq!(money.cents(), 199);
        assert_eq!(money.dollars(), 1);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(598).to_string(), "$5.98");
        assert_eq!(Money::from_cents(350).to_string(), "$3.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-50).to_string(), "-$0.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((b - a).to_string(), "-$7.50");
    }

    #[test]
    fn test_sum() {
        let prices = [
            Money::from_cents(199),
            Money::from_cents(200),
            Money::from_cents(199),
        ];
        let total: Money = prices.into_iter().sum();
        assert_eq!(total, Money::from_cents(598));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let huge = [Money::from_cents(i64::MAX), Money::from_cents(199)];
        let total: Money = huge.into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let floor = Money::from_cents(i64::MIN) - Money::from_cents(1);
        assert_eq!(floor.cents(), i64::MIN);
    }
}
