//! # brew-core: Pure Dispenser Logic for Brew Station
//!
//! Recipes, inventory, the recipe catalog and the purchase workflow, as
//! plain data and functions with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew Station Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (caller)                           │   │
//! │  │    menu ──► pick slot ──► pay ──► drink + change                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               brew-machine (shared state)                       │   │
//! │  │    MachineState, config, purchase journal, tracing              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  recipe   │  │ inventory │  │  catalog  │  │ purchase  │  │   │
//! │  │   │  Recipe   │  │ Inventory │  │RecipeBook │  │  process  │  │   │
//! │  │   │  Builder  │  │  restock  │  │ 3 slots   │  │  Outcome  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Ingredient kinds and the four-amount record
//! - [`quantity`] / [`money`] - Non-negative amount and price newtypes
//! - [`validation`] - The single textual-amount rule
//! - [`recipe`] - Recipe and its all-or-nothing builder
//! - [`inventory`] - Stock levels, restock, deduction, listing
//! - [`catalog`] - Fixed slot store behind the [`RecipeBook`] trait
//! - [`purchase`] - The per-transaction workflow
//! - [`coffee_maker`] - The facade a front end drives
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{CoffeeMaker, Money, Recipe};
//!
//! let mut maker = CoffeeMaker::new();
//! maker.add_recipe(Recipe::builder("Coffee").price("50").coffee("3").build().unwrap());
//!
//! // Underpaying is refunded in full
//! assert_eq!(maker.make_coffee(0, Money::from_units(30)).units(), 30);
//! assert_eq!(maker.make_coffee(0, Money::from_units(55)).units(), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod coffee_maker;
pub mod error;
pub mod inventory;
pub mod money;
pub mod purchase;
pub mod quantity;
pub mod recipe;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{RecipeBook, RecipeCatalog};
pub use coffee_maker::CoffeeMaker;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use purchase::{PurchaseOutcome, PurchaseStage, PurchaseStatus, RejectReason};
pub use quantity::Quantity;
pub use recipe::{Recipe, RecipeBuilder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of recipe slots in the standard catalog.
pub const RECIPE_SLOTS: usize = 3;

/// Starting level of every ingredient in a fresh inventory.
pub const DEFAULT_STOCK_LEVEL: u32 = 15;
