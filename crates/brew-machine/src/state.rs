//! # Machine State
//!
//! The shared, thread-safe dispenser a front end talks to.
//!
//! ## Thread Safety
//! Catalog, inventory and journal sit behind one `Arc<Mutex<_>>`. A purchase
//! runs slot lookup, payment check, stock check, deduction and the journal
//! entry under a single lock acquisition, so two customers can never both
//! pass the stock check against stock that only covers one.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Machine State Operations                             │
//! │                                                                         │
//! │  Front End Action         MachineState            Dispenser Change      │
//! │  ────────────────         ────────────            ────────────────      │
//! │                                                                         │
//! │  Pick + pay ─────────────► make_coffee() ───────► stock -= recipe,     │
//! │                                                   journal.record()     │
//! │  Restock ────────────────► add_inventory() ─────► stock += amounts     │
//! │                                                                         │
//! │  Manage menu ────────────► add/edit/delete ─────► slot changes         │
//! │                                                                         │
//! │  View ───────────────────► check_inventory(),  ─► (read only)          │
//! │                            recipes(), history()                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use brew_core::{
    CoffeeMaker, CoreResult, Inventory, Money, PurchaseOutcome, Recipe, RecipeBook,
    RecipeCatalog, RECIPE_SLOTS,
};

use crate::config::MachineConfig;
use crate::journal::{Journal, JournalSummary, PurchaseRecord};

/// Everything guarded by the state lock.
#[derive(Debug)]
pub struct Dispenser {
    pub maker: CoffeeMaker<RecipeCatalog>,
    pub journal: Journal,
}

/// Cloneable handle to one dispenser.
#[derive(Debug, Clone)]
pub struct MachineState {
    dispenser: Arc<Mutex<Dispenser>>,
}

impl MachineState {
    /// Default stock and journal sizing.
    pub fn new() -> Self {
        Self::from_config(&MachineConfig::default())
    }

    pub fn from_config(config: &MachineConfig) -> Self {
        let inventory = Inventory::with_stock(config.stock_levels());
        let dispenser = Dispenser {
            maker: CoffeeMaker::with_inventory(inventory),
            journal: Journal::with_capacity(config.journal_capacity()),
        };

        info!(
            journal_capacity = config.journal_capacity(),
            "Machine state initialized"
        );

        MachineState {
            dispenser: Arc::new(Mutex::new(dispenser)),
        }
    }

    /// Executes a function with read access to the dispenser.
    pub fn with_dispenser<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Dispenser) -> R,
    {
        let dispenser = self.dispenser.lock().expect("Dispenser mutex poisoned");
        f(&dispenser)
    }

    /// Executes a function with write access to the dispenser.
    pub fn with_dispenser_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Dispenser) -> R,
    {
        let mut dispenser = self.dispenser.lock().expect("Dispenser mutex poisoned");
        f(&mut dispenser)
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    pub fn add_recipe(&self, recipe: Recipe) -> bool {
        let name = recipe.name().to_string();
        debug!(recipe = %name, "add_recipe");

        let added = self.with_dispenser_mut(|d| d.maker.add_recipe(recipe));
        if added {
            info!(recipe = %name, "Recipe added");
        } else {
            debug!(recipe = %name, "Recipe not added: catalog full or name taken");
        }
        added
    }

    pub fn delete_recipe(&self, slot: usize) -> Option<String> {
        debug!(slot, "delete_recipe");

        let removed = self.with_dispenser_mut(|d| d.maker.delete_recipe(slot));
        if let Some(ref name) = removed {
            info!(slot, recipe = %name, "Recipe removed");
        }
        removed
    }

    pub fn edit_recipe(&self, slot: usize, recipe: Recipe) -> Option<String> {
        debug!(slot, recipe = %recipe.name(), "edit_recipe");

        let edited = self.with_dispenser_mut(|d| d.maker.edit_recipe(slot, recipe));
        if let Some(ref name) = edited {
            info!(slot, recipe = %name, "Recipe replaced");
        }
        edited
    }

    /// Snapshot of every slot, holes included.
    pub fn recipes(&self) -> [Option<Recipe>; RECIPE_SLOTS] {
        self.with_dispenser(|d| d.maker.slots().clone())
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn add_inventory(
        &self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> CoreResult<()> {
        debug!(coffee, milk, sugar, chocolate, "add_inventory");

        let result =
            self.with_dispenser_mut(|d| d.maker.add_inventory(coffee, milk, sugar, chocolate));
        if let Err(ref e) = result {
            warn!(error = %e, "Restock rejected");
        }
        result
    }

    pub fn check_inventory(&self) -> String {
        self.with_dispenser(|d| d.maker.check_inventory())
    }

    pub fn inventory(&self) -> Inventory {
        self.with_dispenser(|d| d.maker.inventory().clone())
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Runs a purchase and returns only the change.
    pub fn make_coffee(&self, slot: usize, paid: Money) -> Money {
        self.purchase(slot, paid).change
    }

    /// Runs a purchase, journals it, and returns the full outcome.
    pub fn purchase(&self, slot: usize, paid: Money) -> PurchaseOutcome {
        debug!(slot, paid = %paid, "purchase");

        let (outcome, recipe) = self.with_dispenser_mut(|d| {
            let recipe = d.maker.recipe_book().get(slot).map(|r| r.name().to_string());
            let outcome = d.maker.purchase(slot, paid);
            d.journal.record(PurchaseRecord::from_outcome(&outcome, recipe.clone()));
            (outcome, recipe)
        });

        match outcome.reject_reason() {
            None => info!(
                slot,
                recipe = recipe.as_deref().unwrap_or_default(),
                paid = %paid,
                change = %outcome.change,
                "Purchase completed"
            ),
            Some(reason) => warn!(
                slot,
                paid = %paid,
                stage = ?outcome.stage(),
                reason = %reason,
                "Purchase rejected, refunding"
            ),
        }

        outcome
    }

    // =========================================================================
    // Journal
    // =========================================================================

    /// Journaled purchases, oldest first.
    pub fn history(&self) -> Vec<PurchaseRecord> {
        self.with_dispenser(|d| d.journal.iter().cloned().collect())
    }

    pub fn summary(&self) -> JournalSummary {
        self.with_dispenser(|d| d.journal.summary())
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
