//! # Coffee Maker
//!
//! The dispenser facade: one recipe book, one inventory, and the call
//! contract a front end drives.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator                         Customer                              │
//! │  ────────                         ────────                              │
//! │  add_recipe(Coffee)   → true      make_coffee(0, 75) → 25               │
//! │  add_inventory("0",..)→ Ok        make_coffee(2, 50) → 50 (empty slot)  │
//! │  check_inventory()    → listing   purchase(0, 20)    → outcome + reason │
//! │  edit_recipe / delete_recipe                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The recipe book is generic so a dispenser can be assembled around any
//! [`RecipeBook`]; [`RecipeCatalog`] is the default.

use crate::catalog::{RecipeBook, RecipeCatalog};
use crate::error::CoreResult;
use crate::inventory::Inventory;
use crate::money::Money;
use crate::purchase::{self, PurchaseOutcome};
use crate::recipe::Recipe;
use crate::RECIPE_SLOTS;

/// Recipe book plus inventory.
///
/// ## Example
/// ```rust
/// use brew_core::{CoffeeMaker, Money, Recipe};
///
/// let mut maker = CoffeeMaker::new();
/// let coffee = Recipe::builder("Coffee")
///     .price("50")
///     .coffee("3")
///     .milk("1")
///     .sugar("1")
///     .build()
///     .unwrap();
///
/// assert!(maker.add_recipe(coffee));
/// assert_eq!(maker.make_coffee(0, Money::from_units(75)).units(), 25);
/// assert_eq!(
///     maker.check_inventory(),
///     "Coffee: 12\nMilk: 14\nSugar: 14\nChocolate: 15\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CoffeeMaker<B = RecipeCatalog> {
    book: B,
    inventory: Inventory,
}

impl CoffeeMaker<RecipeCatalog> {
    /// Empty catalog, default stock.
    pub fn new() -> Self {
        Self::with_inventory(Inventory::new())
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self::with_parts(RecipeCatalog::new(), inventory)
    }

    /// Every slot of the standard catalog, holes included.
    pub fn slots(&self) -> &[Option<Recipe>; RECIPE_SLOTS] {
        self.book.list()
    }
}

impl Default for CoffeeMaker<RecipeCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RecipeBook> CoffeeMaker<B> {
    pub fn with_parts(book: B, inventory: Inventory) -> Self {
        CoffeeMaker { book, inventory }
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        self.book.add(recipe)
    }

    pub fn delete_recipe(&mut self, slot: usize) -> Option<String> {
        self.book.delete(slot)
    }

    pub fn edit_recipe(&mut self, slot: usize, recipe: Recipe) -> Option<String> {
        self.book.edit(slot, recipe)
    }

    /// Every slot, holes included.
    pub fn recipes(&self) -> &[Option<Recipe>] {
        self.book.slots()
    }

    pub fn recipe_book(&self) -> &B {
        &self.book
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Restocks from four textual amounts; see [`Inventory::restock`].
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> CoreResult<()> {
        self.inventory.restock(coffee, milk, sugar, chocolate)
    }

    pub fn check_inventory(&self) -> String {
        self.inventory.describe()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Runs a purchase and returns only the change.
    pub fn make_coffee(&mut self, slot: usize, paid: Money) -> Money {
        self.purchase(slot, paid).change
    }

    /// Runs a purchase and returns the full outcome.
    pub fn purchase(&mut self, slot: usize, paid: Money) -> PurchaseOutcome {
        purchase::process(&self.book, &mut self.inventory, slot, paid)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::purchase::RejectReason;
    use crate::types::Ingredient;

    const DEFAULT_LISTING: &str = "Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n";

    fn recipe(name: &str, amounts: [&str; 4], price: &str) -> Recipe {
        let [chocolate, coffee, milk, sugar] = amounts;
        Recipe::builder(name)
            .chocolate(chocolate)
            .coffee(coffee)
            .milk(milk)
            .sugar(sugar)
            .price(price)
            .build()
            .unwrap()
    }

    fn coffee() -> Recipe {
        recipe("Coffee", ["0", "3", "1", "1"], "50")
    }

    fn mocha() -> Recipe {
        recipe("Mocha", ["20", "3", "1", "1"], "75")
    }

    fn latte() -> Recipe {
        recipe("Latte", ["0", "3", "3", "1"], "100")
    }

    fn hot_chocolate() -> Recipe {
        recipe("Hot Chocolate", ["4", "0", "1", "1"], "65")
    }

    fn occupied(maker: &CoffeeMaker) -> usize {
        maker.recipes().iter().flatten().count()
    }

    #[test]
    fn test_purchase_deducts_and_returns_change() {
        let mut maker = CoffeeMaker::new();
        assert!(maker.add_recipe(coffee()));

        assert_eq!(maker.make_coffee(0, Money::from_units(75)), Money::from_units(25));
        assert_eq!(
            maker.check_inventory(),
            "Coffee: 12\nMilk: 14\nSugar: 14\nChocolate: 15\n"
        );
    }

    #[test]
    fn test_empty_slot_refunds_and_keeps_stock() {
        let mut maker = CoffeeMaker::new();
        assert_eq!(maker.make_coffee(0, Money::from_units(50)), Money::from_units(50));
        assert_eq!(maker.check_inventory(), DEFAULT_LISTING);
    }

    #[test]
    fn test_add_inventory() {
        let mut maker = CoffeeMaker::new();
        maker.add_inventory("0", "1", "2", "3").unwrap();
        assert_eq!(
            maker.check_inventory(),
            "Coffee: 15\nMilk: 16\nSugar: 17\nChocolate: 18\n"
        );
    }

    #[test]
    fn test_add_inventory_rejects_mixed_bad_input() {
        let mut maker = CoffeeMaker::new();
        let err = maker.add_inventory("4", "-1", "str", "3").unwrap_err();
        assert!(matches!(err, CoreError::InventoryValidation(_)));
        assert_eq!(maker.check_inventory(), DEFAULT_LISTING);
    }

    #[test]
    fn test_add_inventory_all_zero() {
        let mut maker = CoffeeMaker::new();
        maker.add_inventory("0", "0", "0", "0").unwrap();
        assert_eq!(maker.check_inventory(), DEFAULT_LISTING);
    }

    #[test]
    fn test_add_inventory_each_negative_fails() {
        let mut maker = CoffeeMaker::new();
        assert!(maker.add_inventory("-15", "0", "0", "0").is_err());
        assert!(maker.add_inventory("0", "-15", "0", "0").is_err());
        assert!(maker.add_inventory("0", "0", "-15", "0").is_err());
        assert!(maker.add_inventory("0", "0", "0", "-15").is_err());
        assert_eq!(maker.check_inventory(), DEFAULT_LISTING);
    }

    #[test]
    fn test_fourth_recipe_is_rejected() {
        let mut maker = CoffeeMaker::new();
        assert!(maker.add_recipe(coffee()));
        assert!(maker.add_recipe(mocha()));
        assert!(maker.add_recipe(latte()));
        assert!(!maker.add_recipe(hot_chocolate()));
        assert_eq!(occupied(&maker), 3);
    }

    #[test]
    fn test_delete_and_edit_empty_slot() {
        let mut maker = CoffeeMaker::new();
        assert_eq!(maker.delete_recipe(0), None);
        assert_eq!(maker.edit_recipe(0, coffee()), None);
        assert_eq!(occupied(&maker), 0);
    }

    #[test]
    fn test_edit_returns_new_name_and_updates_slot() {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(coffee());

        assert_eq!(maker.edit_recipe(0, latte()), Some("Latte".to_string()));
        assert_eq!(maker.recipes()[0].as_ref().map(Recipe::name), Some("Latte"));
    }

    #[test]
    fn test_delete_returns_name() {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(coffee());
        assert_eq!(maker.delete_recipe(0), Some("Coffee".to_string()));
        assert!(maker.recipes()[0].is_none());
    }

    #[test]
    fn test_change_is_paid_minus_price() {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(coffee());
        assert_eq!(maker.make_coffee(0, Money::from_units(55)).units(), 5);
    }

    #[test]
    fn test_underpayment_is_refunded() {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(coffee());
        assert_eq!(maker.make_coffee(0, Money::from_units(25)).units(), 25);
        assert_eq!(maker.check_inventory(), DEFAULT_LISTING);
    }

    #[test]
    fn test_mocha_short_on_chocolate_is_refunded() {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(coffee());
        maker.add_recipe(mocha());

        let outcome = maker.purchase(1, Money::from_units(100));
        assert_eq!(outcome.change.units(), 100);
        assert_eq!(
            outcome.reject_reason(),
            Some(RejectReason::InsufficientStock {
                ingredient: Ingredient::Chocolate
            })
        );
        assert_eq!(maker.check_inventory(), DEFAULT_LISTING);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(coffee());
        maker.add_recipe(mocha());
        maker.delete_recipe(0);

        let first: [Option<Recipe>; RECIPE_SLOTS] = maker.slots().clone();
        let second = maker.slots().clone();
        assert_eq!(first, second);
        assert!(first[0].is_none());
        assert_eq!(&first[..], maker.recipes());
    }

    /// One-slot book standing in for the standard catalog.
    #[derive(Default)]
    struct SingleSlot {
        slots: [Option<Recipe>; 1],
        adds: usize,
    }

    impl RecipeBook for SingleSlot {
        fn slots(&self) -> &[Option<Recipe>] {
            &self.slots
        }

        fn add(&mut self, recipe: Recipe) -> bool {
            self.adds += 1;
            if self.slots[0].is_some() {
                return false;
            }
            self.slots[0] = Some(recipe);
            true
        }

        fn delete(&mut self, slot: usize) -> Option<String> {
            self.slots.get_mut(slot)?.take().map(|r| r.name().to_string())
        }

        fn edit(&mut self, slot: usize, recipe: Recipe) -> Option<String> {
            let current = self.slots.get_mut(slot)?.as_mut()?;
            *current = recipe;
            Some(current.name().to_string())
        }
    }

    #[test]
    fn test_custom_recipe_book() {
        let mut maker = CoffeeMaker::with_parts(SingleSlot::default(), Inventory::new());
        assert!(maker.add_recipe(coffee()));
        assert!(!maker.add_recipe(latte()));
        assert_eq!(maker.recipe_book().adds, 2);
        assert_eq!(maker.recipes().len(), 1);

        assert_eq!(maker.make_coffee(0, Money::from_units(60)).units(), 10);
        assert_eq!(maker.make_coffee(1, Money::from_units(60)).units(), 60);
    }
}
