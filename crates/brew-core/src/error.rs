//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brew-core errors (this file)                                          │
//! │  ├── CoreError        - Recipe / inventory rule violations             │
//! │  └── ValidationError  - A single field failed to parse or validate     │
//! │                                                                         │
//! │  brew-machine errors (separate crate)                                  │
//! │  └── MachineError     - Config file, I/O, wrapped CoreError            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → MachineError → Front end          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! - An empty recipe slot is `None`, not an error.
//! - A rejected purchase is a normal outcome (full refund), see
//!   [`crate::purchase`].

use thiserror::Error;

use crate::types::Ingredient;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A restock amount was malformed, negative, or would overflow.
    ///
    /// ## When This Occurs
    /// ```text
    /// add_inventory("4", "-1", "str", "3")
    ///      │
    ///      ▼
    /// milk: "-1" → Negative
    ///      │
    ///      ▼
    /// InventoryValidation(milk must not be negative, got -1)
    ///      │
    ///      ▼
    /// No stock level changes (not even coffee)
    /// ```
    #[error("Invalid inventory amount: {0}")]
    InventoryValidation(ValidationError),

    /// A recipe field was malformed or negative.
    #[error("Invalid recipe: {0}")]
    RecipeValidation(ValidationError),

    /// Stock cannot cover a recipe requirement.
    #[error("Insufficient stock for {ingredient}: available {available}, requested {requested}")]
    InsufficientStock {
        ingredient: Ingredient,
        available: u32,
        requested: u32,
    },
}

impl CoreError {
    /// Returns the underlying field error for validation variants.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CoreError::InventoryValidation(err) | CoreError::RecipeValidation(err) => Some(err),
            CoreError::InsufficientStock { .. } => None,
        }
    }

    /// The ingredient a stock failure refers to.
    pub fn ingredient(&self) -> Option<Ingredient> {
        match self {
            CoreError::InsufficientStock { ingredient, .. } => Some(*ingredient),
            CoreError::InventoryValidation(_) | CoreError::RecipeValidation(_) => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant names the field that failed (`coffee`, `price`, `name`, ...)
/// so callers can point the user at the right input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Not an integer representation.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Parsed fine, but below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

impl ValidationError {
    /// The name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            ingredient: Ingredient::Chocolate,
            available: 15,
            requested: 20,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Chocolate: available 15, requested 20"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "milk".to_string(),
            value: -1,
        };
        assert_eq!(err.to_string(), "milk must not be negative, got -1");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_wrapped_validation_exposes_field() {
        let err = CoreError::RecipeValidation(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "'abc' is not an integer".to_string(),
        });
        assert_eq!(err.validation().map(ValidationError::field), Some("price"));
        assert_eq!(
            err.to_string(),
            "Invalid recipe: price has invalid format: 'abc' is not an integer"
        );

        let stock = CoreError::InsufficientStock {
            ingredient: Ingredient::Milk,
            available: 0,
            requested: 1,
        };
        assert!(stock.validation().is_none());
        assert_eq!(stock.ingredient(), Some(Ingredient::Milk));
        assert_eq!(err.ingredient(), None);
    }
}
