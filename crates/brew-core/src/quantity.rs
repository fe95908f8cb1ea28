//! # Ingredient Quantity
//!
//! A validated, non-negative unit count. Every recipe amount and every stock
//! level flows through this type, so a negative amount cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::{parse_amount, validate_amount, ValidationResult};

/// Units of a single ingredient.
///
/// ## Example
/// ```rust
/// use brew_core::Quantity;
///
/// let coffee: Quantity = "3".parse().unwrap();
/// assert_eq!(coffee.get(), 3);
/// assert!("-3".parse::<Quantity>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// No units.
    pub const ZERO: Quantity = Quantity(0);

    #[inline]
    pub const fn new(units: u32) -> Self {
        Quantity(units)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses `repr`, reporting failures against `field`.
    pub fn parse(field: &str, repr: &str) -> ValidationResult<Self> {
        parse_amount(field, repr).map(Quantity)
    }

    /// Returns `None` instead of wrapping past `u32::MAX`.
    #[inline]
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }

    /// Returns `None` if the result would be negative.
    #[inline]
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::parse("quantity", s)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate_amount("quantity", value).map(Quantity)
    }
}

impl From<u32> for Quantity {
    fn from(units: u32) -> Self {
        Quantity(units)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
