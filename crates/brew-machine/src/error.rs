//! # Machine Error Types
//!
//! Errors raised by the stateful dispenser layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Machine Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Domain      │  │  Configuration  │  │       Filesystem        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Core           │  │  ConfigParse    │  │  Io                     │ │
//! │  │  (restock or    │  │  ConfigSerialize│  │                         │ │
//! │  │   recipe field) │  │  InvalidConfig  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected purchases are not errors; they come back as a
//! [`PurchaseOutcome`](brew_core::PurchaseOutcome).

use brew_core::CoreError;
use thiserror::Error;

/// Result type alias for machine operations.
pub type MachineResult<T> = Result<T, MachineError>;

#[derive(Debug, Error)]
pub enum MachineError {
    // =========================================================================
    // Domain Errors
    // =========================================================================
    /// A recipe or inventory rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to read or write the config file.
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`MachineConfig`](crate::config::MachineConfig).
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The config parsed but a value is unusable.
    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(String),
}

impl MachineError {
    /// Returns true if this error came from validating operator input.
    pub fn is_validation(&self) -> bool {
        matches!(self, MachineError::Core(err) if err.validation().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::ValidationError;

    #[test]
    fn test_core_error_is_transparent() {
        let err: MachineError = CoreError::InventoryValidation(ValidationError::Negative {
            field: "milk".into(),
            value: -1,
        })
        .into();

        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid inventory amount: milk must not be negative, got -1"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = MachineError::InvalidConfig("journal.capacity must be greater than 0".into());
        assert!(!err.is_validation());
        assert!(err.to_string().contains("journal.capacity"));
    }
}
