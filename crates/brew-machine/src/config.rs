//! # Machine Configuration
//!
//! Starting stock and journal sizing for a dispenser.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BREW_STOCK_COFFEE=40                                               │
//! │     BREW_JOURNAL_CAPACITY=500                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/dispenser/dispenser.toml (Linux)                         │
//! │     ~/Library/Application Support/com.brew.dispenser/dispenser.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     15 of every ingredient, 100 journal entries                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # dispenser.toml
//! [stock]
//! coffee = 15
//! milk = 15
//! sugar = 15
//! chocolate = 15
//!
//! [journal]
//! capacity = 100
//! ```
//!
//! Environment values go through the same amount rule as restock input;
//! a malformed value is logged and ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use brew_core::validation::parse_amount;
use brew_core::{Ingredient, Ingredients, Quantity, DEFAULT_STOCK_LEVEL};

use crate::error::{MachineError, MachineResult};
use crate::journal::MAX_JOURNAL_CAPACITY;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "dispenser.toml";

// =============================================================================
// Stock Settings
// =============================================================================

/// Ingredient levels a fresh dispenser starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSettings {
    #[serde(default = "default_level")]
    pub coffee: u32,

    #[serde(default = "default_level")]
    pub milk: u32,

    #[serde(default = "default_level")]
    pub sugar: u32,

    #[serde(default = "default_level")]
    pub chocolate: u32,
}

fn default_level() -> u32 {
    DEFAULT_STOCK_LEVEL
}

impl StockSettings {
    pub fn levels(&self) -> Ingredients {
        Ingredients::new(self.coffee, self.milk, self.sugar, self.chocolate)
    }

    fn set(&mut self, ingredient: Ingredient, level: u32) {
        match ingredient {
            Ingredient::Coffee => self.coffee = level,
            Ingredient::Milk => self.milk = level,
            Ingredient::Sugar => self.sugar = level,
            Ingredient::Chocolate => self.chocolate = level,
        }
    }
}

impl Default for StockSettings {
    fn default() -> Self {
        StockSettings {
            coffee: default_level(),
            milk: default_level(),
            sugar: default_level(),
            chocolate: default_level(),
        }
    }
}

// =============================================================================
// Journal Settings
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalSettings {
    /// Purchase records kept before the oldest is evicted.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    100
}

impl Default for JournalSettings {
    fn default() -> Self {
        JournalSettings {
            capacity: default_capacity(),
        }
    }
}

// =============================================================================
// Main Machine Configuration
// =============================================================================

/// Complete dispenser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default)]
    pub stock: StockSettings,

    #[serde(default)]
    pub journal: JournalSettings,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`dispenser.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> MachineResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading machine config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load machine config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> MachineResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| MachineError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Machine config saved");
        Ok(())
    }

    pub fn validate(&self) -> MachineResult<()> {
        if self.journal.capacity == 0 {
            return Err(MachineError::InvalidConfig(
                "journal.capacity must be greater than 0".into(),
            ));
        }

        if self.journal.capacity > MAX_JOURNAL_CAPACITY {
            return Err(MachineError::InvalidConfig(format!(
                "journal.capacity must be at most {}, got {}",
                MAX_JOURNAL_CAPACITY, self.journal.capacity
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `BREW_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for ingredient in Ingredient::ALL {
            let key = format!("BREW_STOCK_{}", ingredient.field().to_uppercase());
            let Some(raw) = lookup(&key) else {
                continue;
            };
            match parse_amount(ingredient.field(), &raw) {
                Ok(level) => {
                    debug!(%ingredient, level, "Overriding stock level from environment");
                    self.stock.set(ingredient, level);
                }
                Err(e) => warn!(key = %key, value = %raw, "Ignoring stock override: {}", e),
            }
        }

        if let Some(raw) = lookup("BREW_JOURNAL_CAPACITY") {
            match parse_amount("capacity", &raw) {
                Ok(capacity) => {
                    debug!(capacity, "Overriding journal capacity from environment");
                    self.journal.capacity = capacity as usize;
                }
                Err(e) => warn!(value = %raw, "Ignoring journal capacity override: {}", e),
            }
        }
    }

    /// `<platform config dir>/dispenser.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "brew", "dispenser")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn stock_levels(&self) -> Ingredients {
        self.stock.levels()
    }

    pub fn stock_level(&self, ingredient: Ingredient) -> Quantity {
        self.stock.levels().get(ingredient)
    }

    pub fn journal_capacity(&self) -> usize {
        self.journal.capacity
    }
}
