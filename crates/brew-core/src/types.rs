//! # Domain Types
//!
//! The four ingredient kinds and the amounts record shared by recipes
//! (requirements) and the inventory (stock levels).
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────┐               │
//! │  │   Ingredient    │        │      Ingredients         │               │
//! │  │  ─────────────  │        │  ──────────────────────  │               │
//! │  │  Coffee         │ keys   │  coffee:    Quantity     │               │
//! │  │  Milk           │───────►│  milk:      Quantity     │               │
//! │  │  Sugar          │        │  sugar:     Quantity     │               │
//! │  │  Chocolate      │        │  chocolate: Quantity     │               │
//! │  └─────────────────┘        └────────────┬─────────────┘               │
//! │                                          │                              │
//! │                          ┌───────────────┴───────────────┐              │
//! │                          ▼                               ▼              │
//! │                  Recipe.amounts                  Inventory.stock        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fixed Order
//! `Ingredient::ALL` is Coffee, Milk, Sugar, Chocolate. Inventory rendering,
//! restock validation and shortfall detection all walk this order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::quantity::Quantity;
use crate::validation::ValidationResult;

// =============================================================================
// Ingredient
// =============================================================================

/// One of the four ingredient kinds the dispenser stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Coffee,
    Milk,
    Sugar,
    Chocolate,
}

impl Ingredient {
    /// All ingredients in display order.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Coffee,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Chocolate,
    ];

    /// Capitalized name used in the inventory listing ("Coffee").
    pub const fn label(&self) -> &'static str {
        match self {
            Ingredient::Coffee => "Coffee",
            Ingredient::Milk => "Milk",
            Ingredient::Sugar => "Sugar",
            Ingredient::Chocolate => "Chocolate",
        }
    }

    /// Field name used in validation errors ("coffee").
    pub const fn field(&self) -> &'static str {
        match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Chocolate => "chocolate",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Ingredients
// =============================================================================

/// An amount for each of the four ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ingredients {
    pub coffee: Quantity,
    pub milk: Quantity,
    pub sugar: Quantity,
    pub chocolate: Quantity,
}

impl Ingredients {
    pub const fn new(coffee: u32, milk: u32, sugar: u32, chocolate: u32) -> Self {
        Ingredients {
            coffee: Quantity::new(coffee),
            milk: Quantity::new(milk),
            sugar: Quantity::new(sugar),
            chocolate: Quantity::new(chocolate),
        }
    }

    /// The same level for every ingredient.
    pub const fn uniform(units: u32) -> Self {
        Ingredients::new(units, units, units, units)
    }

    /// Parses four textual amounts given in [`Ingredient::ALL`] order.
    ///
    /// Stops at the first invalid amount; nothing is returned unless all four
    /// are valid.
    ///
    /// ## Example
    /// ```rust
    /// use brew_core::{Ingredient, Ingredients};
    ///
    /// let parsed = Ingredients::parse(["0", "1", "2", "3"]).unwrap();
    /// assert_eq!(parsed.get(Ingredient::Chocolate).get(), 3);
    ///
    /// let err = Ingredients::parse(["4", "-1", "str", "3"]).unwrap_err();
    /// assert_eq!(err.field(), "milk");
    /// ```
    pub fn parse(reprs: [&str; 4]) -> ValidationResult<Self> {
        let mut parsed = Ingredients::default();
        for (ingredient, repr) in Ingredient::ALL.into_iter().zip(reprs) {
            parsed.set(ingredient, Quantity::parse(ingredient.field(), repr)?);
        }
        Ok(parsed)
    }

    pub const fn get(&self, ingredient: Ingredient) -> Quantity {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }

    pub fn set(&mut self, ingredient: Ingredient, quantity: Quantity) {
        match ingredient {
            Ingredient::Coffee => self.coffee = quantity,
            Ingredient::Milk => self.milk = quantity,
            Ingredient::Sugar => self.sugar = quantity,
            Ingredient::Chocolate => self.chocolate = quantity,
        }
    }

    /// `(ingredient, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, Quantity)> + '_ {
        Ingredient::ALL.into_iter().map(move |i| (i, self.get(i)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
