//! # brew-machine: Shared Dispenser State for Brew Station
//!
//! Wraps the pure [`brew_core`] dispenser with the pieces a running machine
//! needs: a thread-safe handle, configuration, a purchase journal and
//! structured logging.
//!
//! ## Crate Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         brew-machine                                    │
//! │                                                                         │
//! │  config.rs ──► MachineConfig (defaults → dispenser.toml → BREW_* env)   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  state.rs  ──► MachineState  Arc<Mutex<Dispenser>>                      │
//! │                  ├── CoffeeMaker (brew-core)                            │
//! │                  └── Journal ◄── journal.rs (PurchaseRecord FIFO)       │
//! │                                                                         │
//! │  logging.rs ─► init_tracing()   error.rs ─► MachineError                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use brew_machine::{MachineConfig, MachineState};
//! use brew_core::{Money, Recipe};
//!
//! let state = MachineState::from_config(&MachineConfig::default());
//! state.add_recipe(Recipe::builder("Coffee").price("50").coffee("3").build().unwrap());
//!
//! assert_eq!(state.make_coffee(0, Money::from_units(75)).units(), 25);
//! assert_eq!(state.history().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod journal;
pub mod logging;
pub mod state;

pub use config::MachineConfig;
pub use error::{MachineError, MachineResult};
pub use journal::{Journal, JournalSummary, PurchaseRecord};
pub use logging::{init_tracing, try_init_tracing};
pub use state::{Dispenser, MachineState};
