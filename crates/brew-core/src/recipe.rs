//! # Recipe
//!
//! A named drink: four ingredient amounts plus a price.
//!
//! ## Field-by-Field Validation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Recipe::new()          name: ""   price: 0   amounts: 0/0/0/0          │
//! │       │                                                                 │
//! │       ├── set_name("Mocha")        ✓ name = "Mocha"                     │
//! │       ├── set_price("75")          ✓ price = 75                         │
//! │       ├── set_chocolate("-20")     ✗ RecipeValidation(chocolate ...)    │
//! │       │                              chocolate stays 0                  │
//! │       └── set_chocolate("20")      ✓ chocolate = 20                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each setter validates independently and leaves the field unchanged on
//! failure. Use [`RecipeBuilder`] when a recipe must only exist if every
//! field is valid.
//!
//! ## Identity
//! Two recipes are equal when their names are equal (exact, case-sensitive).
//! Price and amounts do not take part in equality or hashing.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::quantity::Quantity;
use crate::types::{Ingredient, Ingredients};
use crate::validation::validate_recipe_name;

// =============================================================================
// Recipe
// =============================================================================

/// A purchasable drink.
///
/// ## Example
/// ```rust
/// use brew_core::{Ingredient, Recipe};
///
/// let mut latte = Recipe::new();
/// latte.set_name("Latte").unwrap();
/// latte.set_price("100").unwrap();
/// latte.set_amount(Ingredient::Milk, "3").unwrap();
///
/// assert_eq!(latte.price().units(), 100);
/// assert_eq!(latte.amount(Ingredient::Milk).get(), 3);
/// assert_eq!(latte.amount(Ingredient::Coffee).get(), 0);
/// assert!(latte.set_price("-1").is_err());
/// assert_eq!(latte.price().units(), 100);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recipe {
    name: String,
    price: Money,
    amounts: Ingredients,
}

impl Recipe {
    /// Creates an unnamed recipe with zero price and amounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an all-or-nothing recipe builder.
    pub fn builder(name: &str) -> RecipeBuilder {
        RecipeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn amount(&self, ingredient: Ingredient) -> Quantity {
        self.amounts.get(ingredient)
    }

    pub fn amounts(&self) -> &Ingredients {
        &self.amounts
    }

    /// Sets the name; empty or whitespace-only names are rejected.
    pub fn set_name(&mut self, name: &str) -> CoreResult<()> {
        validate_recipe_name(name).map_err(CoreError::RecipeValidation)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Parses and sets the price.
    pub fn set_price(&mut self, repr: &str) -> CoreResult<()> {
        self.price = Money::parse("price", repr).map_err(CoreError::RecipeValidation)?;
        Ok(())
    }

    /// Parses and sets the amount of one ingredient.
    pub fn set_amount(&mut self, ingredient: Ingredient, repr: &str) -> CoreResult<()> {
        let quantity =
            Quantity::parse(ingredient.field(), repr).map_err(CoreError::RecipeValidation)?;
        self.amounts.set(ingredient, quantity);
        Ok(())
    }

    pub fn set_coffee(&mut self, repr: &str) -> CoreResult<()> {
        self.set_amount(Ingredient::Coffee, repr)
    }

    pub fn set_milk(&mut self, repr: &str) -> CoreResult<()> {
        self.set_amount(Ingredient::Milk, repr)
    }

    pub fn set_sugar(&mut self, repr: &str) -> CoreResult<()> {
        self.set_amount(Ingredient::Sugar, repr)
    }

    pub fn set_chocolate(&mut self, repr: &str) -> CoreResult<()> {
        self.set_amount(Ingredient::Chocolate, repr)
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Recipe Builder
// =============================================================================

/// Builds a [`Recipe`] from textual fields, yielding it only if every field
/// is valid. The first failing field is reported.
///
/// ## Example
/// ```rust
/// use brew_core::Recipe;
///
/// let coffee = Recipe::builder("Coffee")
///     .price("50")
///     .coffee("3")
///     .milk("1")
///     .sugar("1")
///     .chocolate("0")
///     .build()
///     .unwrap();
/// assert_eq!(coffee.name(), "Coffee");
///
/// let broken = Recipe::builder("Broken").price("-5").coffee("2").build();
/// assert!(broken.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    recipe: Recipe,
    error: Option<CoreError>,
}

impl RecipeBuilder {
    fn new(name: &str) -> Self {
        let mut builder = RecipeBuilder {
            recipe: Recipe::new(),
            error: None,
        };
        builder.apply(|r| r.set_name(name));
        builder
    }

    fn apply(&mut self, set: impl FnOnce(&mut Recipe) -> CoreResult<()>) {
        if self.error.is_none() {
            if let Err(err) = set(&mut self.recipe) {
                self.error = Some(err);
            }
        }
    }

    pub fn price(mut self, repr: &str) -> Self {
        self.apply(|r| r.set_price(repr));
        self
    }

    pub fn amount(mut self, ingredient: Ingredient, repr: &str) -> Self {
        self.apply(|r| r.set_amount(ingredient, repr));
        self
    }

    pub fn coffee(self, repr: &str) -> Self {
        self.amount(Ingredient::Coffee, repr)
    }

    pub fn milk(self, repr: &str) -> Self {
        self.amount(Ingredient::Milk, repr)
    }

    pub fn sugar(self, repr: &str) -> Self {
        self.amount(Ingredient::Sugar, repr)
    }

    pub fn chocolate(self, repr: &str) -> Self {
        self.amount(Ingredient::Chocolate, repr)
    }

    pub fn build(self) -> CoreResult<Recipe> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.recipe),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
