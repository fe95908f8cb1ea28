//! # Recipe Catalog
//!
//! A fixed number of recipe slots. Slot indices are the external identity of
//! a recipe: delete leaves a hole, edit replaces in place, and nothing is ever
//! compacted.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  slots:   [ Coffee ][  ----  ][ Latte ]                                 │
//! │              0          1         2                                     │
//! │                                                                         │
//! │  add(Mocha)      → fills slot 1 (lowest empty)        → true            │
//! │  add(Coffee)     → name already present               → false           │
//! │  add(anything)   → when all slots occupied            → false           │
//! │  delete(0)       → slot 0 becomes a hole              → Some("Coffee")  │
//! │  delete(0)       → already a hole                     → None            │
//! │  edit(2, Cortado)→ slot 2 replaced                    → Some("Cortado") │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The purchase workflow reads recipes through the [`RecipeBook`] trait, so a
//! dispenser can be assembled around any slot store.

use serde::Serialize;

use crate::recipe::Recipe;
use crate::RECIPE_SLOTS;

// =============================================================================
// RecipeBook Trait
// =============================================================================

/// Slot-indexed recipe storage used by the dispenser.
pub trait RecipeBook {
    /// Every slot, holes included.
    fn slots(&self) -> &[Option<Recipe>];

    /// Places `recipe` in the lowest empty slot.
    ///
    /// Returns false, changing nothing, when every slot is occupied or an
    /// occupied slot already holds a recipe with the same name.
    fn add(&mut self, recipe: Recipe) -> bool;

    /// Empties `slot` and returns the removed recipe's name.
    fn delete(&mut self, slot: usize) -> Option<String>;

    /// Replaces the recipe in an occupied `slot` and returns the new name.
    ///
    /// Sibling slots are not checked for a duplicate name.
    fn edit(&mut self, slot: usize, recipe: Recipe) -> Option<String>;

    /// The recipe in `slot`, or `None` for a hole or an invalid index.
    fn get(&self, slot: usize) -> Option<&Recipe> {
        self.slots().get(slot).and_then(Option::as_ref)
    }
}

// =============================================================================
// RecipeCatalog
// =============================================================================

/// The standard [`RecipeBook`]: exactly [`RECIPE_SLOTS`] slots.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCatalog {
    slots: [Option<Recipe>; RECIPE_SLOTS],
}

impl RecipeCatalog {
    /// Creates a catalog with every slot empty.
    pub fn new() -> Self {
        RecipeCatalog {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Every slot, holes included, as a fixed-length array.
    pub fn list(&self) -> &[Option<Recipe>; RECIPE_SLOTS] {
        &self.slots
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == RECIPE_SLOTS
    }

    /// True if an occupied slot holds a recipe named exactly `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().flatten().any(|r| r.name() == name)
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeBook for RecipeCatalog {
    fn slots(&self) -> &[Option<Recipe>] {
        &self.slots
    }

    fn add(&mut self, recipe: Recipe) -> bool {
        if self.contains(recipe.name()) {
            return false;
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(recipe);
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, slot: usize) -> Option<String> {
        self.slots
            .get_mut(slot)
            .and_then(Option::take)
            .map(|recipe| recipe.name().to_string())
    }

    fn edit(&mut self, slot: usize, recipe: Recipe) -> Option<String> {
        let current = self.slots.get_mut(slot)?.as_mut()?;
        let name = recipe.name().to_string();
        *current = recipe;
        Some(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn named(name: &str) -> Recipe {
        Recipe::builder(name).price("50").coffee("3").build().unwrap()
    }

    fn names(catalog: &RecipeCatalog) -> Vec<Option<&str>> {
        catalog
            .list()
            .iter()
            .map(|slot| slot.as_ref().map(Recipe::name))
            .collect()
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = RecipeCatalog::new();
        assert_eq!(catalog.occupied(), 0);
        assert_eq!(names(&catalog), vec![None, None, None]);
    }

    #[test]
    fn test_add_fills_lowest_empty_slot() {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.add(named("Coffee")));
        assert!(catalog.add(named("Mocha")));
        assert_eq!(names(&catalog), vec![Some("Coffee"), Some("Mocha"), None]);

        catalog.delete(0);
        assert!(catalog.add(named("Latte")));
        assert_eq!(names(&catalog), vec![Some("Latte"), Some("Mocha"), None]);
    }

    #[test]
    fn test_fourth_recipe_is_rejected() {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.add(named("Coffee")));
        assert!(catalog.add(named("Mocha")));
        assert!(catalog.add(named("Latte")));
        assert!(catalog.is_full());

        assert!(!catalog.add(named("Hot Chocolate")));
        assert_eq!(catalog.occupied(), 3);
        assert!(!catalog.contains("Hot Chocolate"));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut catalog = RecipeCatalog::new();
        assert!(catalog.add(named("Coffee")));
        assert!(!catalog.add(named("Coffee")));
        assert!(catalog.list()[1].is_none());
        assert_eq!(catalog.occupied(), 1);

        // exact comparison
        assert!(catalog.add(named("coffee")));
    }

    #[test]
    fn test_delete_returns_name_and_leaves_hole() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(named("Coffee"));
        catalog.add(named("Mocha"));

        assert_eq!(catalog.delete(0), Some("Coffee".to_string()));
        assert_eq!(names(&catalog), vec![None, Some("Mocha"), None]);
        assert_eq!(catalog.delete(0), None);
    }

    #[test]
    fn test_delete_and_edit_out_of_range() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(named("Coffee"));

        assert_eq!(catalog.delete(RECIPE_SLOTS), None);
        assert_eq!(catalog.edit(99, named("Mocha")), None);
        assert!(catalog.get(7).is_none());
        assert_eq!(catalog.occupied(), 1);
    }

    #[test]
    fn test_edit_replaces_in_place_and_returns_new_name() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(named("Coffee"));
        catalog.add(named("Mocha"));

        assert_eq!(catalog.edit(1, named("Cortado")), Some("Cortado".to_string()));
        assert_eq!(names(&catalog), vec![Some("Coffee"), Some("Cortado"), None]);
    }

    #[test]
    fn test_edit_empty_slot_returns_none() {
        let mut catalog = RecipeCatalog::new();
        assert_eq!(catalog.edit(0, named("Coffee")), None);
        assert_eq!(catalog.occupied(), 0);
    }

    #[test]
    fn test_edit_skips_uniqueness_check() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(named("Coffee"));
        catalog.add(named("Mocha"));

        assert_eq!(catalog.edit(1, named("Coffee")), Some("Coffee".to_string()));
        assert_eq!(names(&catalog), vec![Some("Coffee"), Some("Coffee"), None]);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(named("Coffee"));
        catalog.add(named("Mocha"));
        catalog.delete(0);

        assert_eq!(names(&catalog), names(&catalog));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Delete(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[A-D]".prop_map(Op::Add),
            (0usize..5).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: add/delete sequences never exceed capacity and never
        /// create two occupied slots with the same name.
        #[test]
        fn capacity_and_uniqueness_hold(ops in prop::collection::vec(op(), 0..40)) {
            let mut catalog = RecipeCatalog::new();

            for op in ops {
                match op {
                    Op::Add(name) => {
                        let before = format!("{:?}", names(&catalog));
                        if !catalog.add(named(&name)) {
                            prop_assert_eq!(before, format!("{:?}", names(&catalog)));
                        }
                    }
                    Op::Delete(slot) => {
                        catalog.delete(slot);
                    }
                }

                prop_assert!(catalog.occupied() <= RECIPE_SLOTS);
                let mut seen: Vec<&str> =
                    catalog.list().iter().flatten().map(Recipe::name).collect();
                let total = seen.len();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), total);
            }
        }
    }
}
