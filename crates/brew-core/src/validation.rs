//! # Validation Module
//!
//! Input validation shared by recipe fields, prices and restock amounts.
//!
//! ## One Rule for Every Amount
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "12"   ──► parse i64 ──► 12 ≥ 0? ──► fits u32? ──► Ok(12)             │
//! │  "+3"   ──► parse i64 ──► 3                      ──► Ok(3)              │
//! │  "-1"   ──► parse i64 ──► -1 < 0   ──► Negative                         │
//! │  "str"  ──► parse fails           ──► InvalidFormat                     │
//! │  " 5"   ──► parse fails (no trim) ──► InvalidFormat                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers decide which [`CoreError`](crate::CoreError) wraps the failure:
//! recipe setters wrap it as `RecipeValidation`, restock as
//! `InventoryValidation`.
//!
//! ## Usage
//! ```rust
//! use brew_core::validation::{parse_amount, validate_recipe_name};
//!
//! assert_eq!(parse_amount("coffee", "3").unwrap(), 3);
//! assert!(parse_amount("coffee", "-3").is_err());
//! assert!(validate_recipe_name("Latte").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a textual amount into a non-negative integer.
///
/// ## Rules
/// - Must be an integer representation (optional leading sign, digits only)
/// - Must not be negative
/// - Must fit in a `u32`
pub fn parse_amount(field: &str, repr: &str) -> ValidationResult<u32> {
    let value: i64 = repr.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not an integer", repr),
    })?;

    validate_amount(field, value)
}

/// Validates an already-numeric amount with the same rule as [`parse_amount`].
pub fn validate_amount(field: &str, value: i64) -> ValidationResult<u32> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a recipe name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// Names are compared exactly (case-sensitive, untrimmed) by the catalog, so
/// this only rejects names that could never be shown to a customer.
pub fn validate_recipe_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
