//! # Inventory
//!
//! Current stock of the four ingredients.
//!
//! ## All-or-Nothing Mutations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  restock("4", "-1", "str", "3")                                         │
//! │      │                                                                  │
//! │      ├── parse all four first ──► milk fails ──► Err, stock untouched   │
//! │      └── all valid ──► add into a copy ──► overflow? ──► Err            │
//! │                                        └──► commit copy                 │
//! │                                                                         │
//! │  deduct(recipe)                                                         │
//! │      ├── any level < requirement ──► InsufficientStock, untouched       │
//! │      └── otherwise ──► every level -= requirement                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Listing Format
//! [`Inventory::describe`] renders one `Name: value` line per ingredient in
//! the fixed order Coffee, Milk, Sugar, Chocolate, each ending in `\n`.
//! Downstream consumers parse this text, so the format must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::quantity::Quantity;
use crate::recipe::Recipe;
use crate::types::{Ingredient, Ingredients};
use crate::DEFAULT_STOCK_LEVEL;

/// Ingredient stock held by the dispenser.
///
/// ## Example
/// ```rust
/// use brew_core::Inventory;
///
/// let mut inventory = Inventory::new();
/// inventory.restock("0", "1", "2", "3").unwrap();
/// assert_eq!(
///     inventory.describe(),
///     "Coffee: 15\nMilk: 16\nSugar: 17\nChocolate: 18\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    stock: Ingredients,
}

impl Inventory {
    /// Creates an inventory with [`DEFAULT_STOCK_LEVEL`] of everything.
    pub fn new() -> Self {
        Self::with_stock(Ingredients::uniform(DEFAULT_STOCK_LEVEL))
    }

    /// Creates an inventory with explicit starting levels.
    pub fn with_stock(stock: Ingredients) -> Self {
        Inventory { stock }
    }

    pub fn stock(&self) -> &Ingredients {
        &self.stock
    }

    pub fn level(&self, ingredient: Ingredient) -> Quantity {
        self.stock.get(ingredient)
    }

    /// Replaces one level outright.
    pub fn set_level(&mut self, ingredient: Ingredient, quantity: Quantity) {
        self.stock.set(ingredient, quantity);
    }

    // =========================================================================
    // Restock
    // =========================================================================

    /// Adds textual amounts to every level.
    ///
    /// All four amounts are validated before anything changes; on any
    /// failure the whole call fails with `InventoryValidation` and no level
    /// is modified.
    pub fn restock(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> CoreResult<()> {
        let amounts = Ingredients::parse([coffee, milk, sugar, chocolate])
            .map_err(CoreError::InventoryValidation)?;
        self.restock_amounts(&amounts)
    }

    /// Adds already-validated amounts to every level.
    ///
    /// Fails without changing anything if a level would exceed `u32::MAX`.
    pub fn restock_amounts(&mut self, amounts: &Ingredients) -> CoreResult<()> {
        let mut next = self.stock;
        for (ingredient, amount) in amounts.iter() {
            let level = next.get(ingredient).checked_add(amount).ok_or_else(|| {
                CoreError::InventoryValidation(ValidationError::OutOfRange {
                    field: ingredient.field().to_string(),
                    min: 0,
                    max: i64::from(u32::MAX),
                })
            })?;
            next.set(ingredient, level);
        }
        self.stock = next;
        Ok(())
    }

    // =========================================================================
    // Fulfillment
    // =========================================================================

    /// True iff every level covers the recipe's requirement.
    pub fn can_fulfill(&self, recipe: &Recipe) -> bool {
        self.shortfall(recipe).is_none()
    }

    /// First ingredient (in display order) the stock cannot cover.
    pub fn shortfall(&self, recipe: &Recipe) -> Option<Ingredient> {
        Ingredient::ALL
            .into_iter()
            .find(|&ingredient| self.level(ingredient) < recipe.amount(ingredient))
    }

    /// Removes the recipe's requirements from stock.
    ///
    /// Callers gate this with [`can_fulfill`](Self::can_fulfill). If called
    /// anyway on an infeasible recipe it returns `InsufficientStock` and
    /// leaves every level as it was.
    pub fn deduct(&mut self, recipe: &Recipe) -> CoreResult<()> {
        let mut next = self.stock;
        for (ingredient, required) in recipe.amounts().iter() {
            let available = next.get(ingredient);
            let remaining = available
                .checked_sub(required)
                .ok_or(CoreError::InsufficientStock {
                    ingredient,
                    available: available.get(),
                    requested: required.get(),
                })?;
            next.set(ingredient, remaining);
        }
        self.stock = next;
        Ok(())
    }

    /// `"Coffee: N\nMilk: N\nSugar: N\nChocolate: N\n"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ingredient, level) in self.stock.iter() {
            writeln!(f, "{}: {}", ingredient, level)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
