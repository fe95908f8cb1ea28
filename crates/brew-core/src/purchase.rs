//! # Purchase Workflow
//!
//! One transaction: pick a slot, pay, get a drink and change, or get the
//! whole payment back.
//!
//! ## Transaction State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Purchase Stages                                      │
//! │                                                                         │
//! │  ┌───────────┐  slot empty /   ┌──────────────────────────────────┐    │
//! │  │ Selecting │─ out of range ─►│                                  │    │
//! │  └─────┬─────┘                 │                                  │    │
//! │        ▼                       │   Rejected                       │    │
//! │  ┌────────────┐  paid < price  │   change = paid (full refund)    │    │
//! │  │ Validating │───────────────►│   inventory untouched            │    │
//! │  └─────┬──────┘                │                                  │    │
//! │        ▼                       │                                  │    │
//! │  ┌────────────┐  stock short   │                                  │    │
//! │  │ Fulfilling │───────────────►│                                  │    │
//! │  └─────┬──────┘                └──────────────────────────────────┘    │
//! │        ▼                                                                │
//! │  ┌────────────┐                                                        │
//! │  │ Completed  │  inventory -= recipe, change = paid - price            │
//! │  └────────────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order of checks is fixed: slot, then payment, then stock. All three
//! rejections look the same to a customer (full refund); [`RejectReason`]
//! tells them apart for the journal and for tests.
//!
//! ## Ambiguous Change
//! A change equal to the amount paid means either "rejected" or "the drink
//! was free". Callers that need to know use [`PurchaseOutcome::status`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::RecipeBook;
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::Ingredient;

// =============================================================================
// Stage / Reason / Status
// =============================================================================

/// Where a transaction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStage {
    Selecting,
    Validating,
    Fulfilling,
    Completed,
}

/// Why a transaction refunded the full payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// No recipe at the requested slot (hole or invalid index).
    EmptySlot,
    /// The payment does not cover the price.
    InsufficientFunds { price: Money, paid: Money },
    /// Stock cannot cover the recipe; the first short ingredient.
    InsufficientStock { ingredient: Ingredient },
}

impl RejectReason {
    /// The stage whose check failed.
    pub const fn stage(&self) -> PurchaseStage {
        match self {
            RejectReason::EmptySlot => PurchaseStage::Selecting,
            RejectReason::InsufficientFunds { .. } => PurchaseStage::Validating,
            RejectReason::InsufficientStock { .. } => PurchaseStage::Fulfilling,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptySlot => write!(f, "no recipe in selected slot"),
            RejectReason::InsufficientFunds { price, paid } => {
                write!(f, "paid {} but price is {}", paid, price)
            }
            RejectReason::InsufficientStock { ingredient } => {
                write!(f, "not enough {} in stock", ingredient.field())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Completed,
    Rejected(RejectReason),
}

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Result of one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub slot: usize,
    pub paid: Money,
    /// Returned to the customer: `paid - price`, or `paid` on rejection.
    pub change: Money,
    pub status: PurchaseStatus,
}

impl PurchaseOutcome {
    fn completed(slot: usize, paid: Money, change: Money) -> Self {
        PurchaseOutcome {
            slot,
            paid,
            change,
            status: PurchaseStatus::Completed,
        }
    }

    fn rejected(slot: usize, paid: Money, reason: RejectReason) -> Self {
        PurchaseOutcome {
            slot,
            paid,
            change: paid,
            status: PurchaseStatus::Rejected(reason),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, PurchaseStatus::Completed)
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self.status {
            PurchaseStatus::Completed => None,
            PurchaseStatus::Rejected(reason) => Some(reason),
        }
    }

    pub fn stage(&self) -> PurchaseStage {
        match self.status {
            PurchaseStatus::Completed => PurchaseStage::Completed,
            PurchaseStatus::Rejected(reason) => reason.stage(),
        }
    }

    /// What the machine kept: the price on success, zero on rejection.
    pub fn charged(&self) -> Money {
        self.paid.checked_sub(self.change).unwrap_or_default()
    }
}

// =============================================================================
// Workflow
// =============================================================================

/// Runs one purchase against `book` and `inventory`.
///
/// ## Example
/// ```rust
/// use brew_core::purchase::{process, RejectReason};
/// use brew_core::{Inventory, Money, Recipe, RecipeBook, RecipeCatalog};
///
/// let mut book = RecipeCatalog::new();
/// book.add(Recipe::builder("Coffee").price("50").coffee("3").build().unwrap());
/// let mut inventory = Inventory::new();
///
/// let sold = process(&book, &mut inventory, 0, Money::from_units(75));
/// assert_eq!(sold.change.units(), 25);
///
/// let refused = process(&book, &mut inventory, 0, Money::from_units(20));
/// assert_eq!(refused.change.units(), 20);
/// assert!(matches!(
///     refused.reject_reason(),
///     Some(RejectReason::InsufficientFunds { .. })
/// ));
/// ```
pub fn process<B>(book: &B, inventory: &mut Inventory, slot: usize, paid: Money) -> PurchaseOutcome
where
    B: RecipeBook + ?Sized,
{
    // Selecting
    let Some(recipe) = book.get(slot) else {
        return PurchaseOutcome::rejected(slot, paid, RejectReason::EmptySlot);
    };

    // Validating
    let price = recipe.price();
    let Some(change) = paid.checked_sub(price) else {
        return PurchaseOutcome::rejected(
            slot,
            paid,
            RejectReason::InsufficientFunds { price, paid },
        );
    };

    // Fulfilling
    if let Some(ingredient) = inventory.shortfall(recipe) {
        return PurchaseOutcome::rejected(
            slot,
            paid,
            RejectReason::InsufficientStock { ingredient },
        );
    }

    // Completed
    match inventory.deduct(recipe) {
        Ok(()) => PurchaseOutcome::completed(slot, paid, change),
        Err(err) => {
            let ingredient = err
                .ingredient()
                .or_else(|| inventory.shortfall(recipe))
                .unwrap_or(Ingredient::Coffee);
            PurchaseOutcome::rejected(slot, paid, RejectReason::InsufficientStock { ingredient })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
