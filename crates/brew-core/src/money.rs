//! # Money Module
//!
//! Provides the `Money` type for prices, payments and change.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The dispenser accepts and returns whole coin units.                    │
//! │                                                                         │
//! │    price  = 50                                                          │
//! │    paid   = 75                                                          │
//! │    change = paid - price = 25                                           │
//! │                                                                         │
//! │  Money is never negative: change is computed with checked_sub, and     │
//! │  "paid < price" is the Validating-stage rejection, not a negative.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! let price = Money::from_units(50);
//! let paid = Money::from_units(75);
//!
//! assert_eq!(paid.checked_sub(price), Some(Money::from_units(25)));
//! assert_eq!(price.checked_sub(paid), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::{parse_amount, validate_amount, ValidationResult};

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount of money in whole units.
///
/// ## Where Money is Used
/// ```text
/// Recipe.price ──┐
///                ├──► purchase() ──► PurchaseOutcome.change
/// paid ──────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    /// Creates a Money value from whole units.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// let price = Money::from_units(65);
    /// assert_eq!(price.units(), 65);
    /// ```
    #[inline]
    pub const fn from_units(units: u32) -> Self {
        Money(units)
    }

    /// Returns the value in whole units.
    #[inline]
    pub const fn units(&self) -> u32 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses a textual price or payment, reporting failures against `field`.
    ///
    /// Uses the same rule as ingredient amounts: integer, non-negative.
    pub fn parse(field: &str, repr: &str) -> ValidationResult<Self> {
        parse_amount(field, repr).map(Money)
    }

    /// Subtracts `other`, or returns `None` if the result would be negative.
    ///
    /// ## User Workflow
    /// ```text
    /// paid: 75, price: 50
    ///      │
    ///      ▼
    /// checked_sub ← THIS FUNCTION
    ///      │
    ///      ├── None      → paid < price → full refund
    ///      └── Some(25)  → change
    /// ```
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Adds `other`, or returns `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse("amount", s)
    }
}

impl TryFrom<i64> for Money {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate_amount("amount", value).map(Money)
    }
}

impl From<u32> for Money {
    fn from(units: u32) -> Self {
        Money(units)
    }
}

/// Saturating addition; used for running totals.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
