//! # Purchase Journal
//!
//! A bounded audit trail of purchase outcomes, newest last.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  capacity = 3                                                           │
//! │                                                                         │
//! │  record(#1) record(#2) record(#3)   [ #1 | #2 | #3 ]                    │
//! │  record(#4)                         [ #2 | #3 | #4 ]   #1 evicted       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejections are recorded too, with their reason, so the journal explains
//! every refund the machine has handed back.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brew_core::{Money, PurchaseOutcome, PurchaseStatus};

/// One purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub slot: usize,
    /// Recipe name at the time of purchase; `None` for an empty slot.
    pub recipe: Option<String>,
    pub paid: Money,
    pub change: Money,
    pub status: PurchaseStatus,
    pub recorded_at: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn from_outcome(outcome: &PurchaseOutcome, recipe: Option<String>) -> Self {
        PurchaseRecord {
            id: Uuid::new_v4(),
            slot: outcome.slot,
            recipe,
            paid: outcome.paid,
            change: outcome.change,
            status: outcome.status,
            recorded_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, PurchaseStatus::Completed)
    }

    /// Amount the machine kept for this attempt.
    pub fn charged(&self) -> Money {
        self.paid.checked_sub(self.change).unwrap_or_default()
    }
}

/// Totals over the records currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JournalSummary {
    pub completed: usize,
    pub rejected: usize,
    pub collected: Money,
}

/// Largest journal a config may ask for.
pub const MAX_JOURNAL_CAPACITY: usize = 100_000;

/// Fixed-capacity FIFO of [`PurchaseRecord`]s.
///
/// Storage grows as records arrive; the capacity is only the eviction bound.
#[derive(Debug, Clone)]
pub struct Journal {
    records: VecDeque<PurchaseRecord>,
    capacity: usize,
}

impl Journal {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Journal {
            records: VecDeque::new(),
            capacity,
        }
    }

    pub fn record(&mut self, record: PurchaseRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PurchaseRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&PurchaseRecord> {
        self.records.back()
    }

    pub fn summary(&self) -> JournalSummary {
        self.records
            .iter()
            .fold(JournalSummary::default(), |mut summary, record| {
                if record.is_completed() {
                    summary.completed += 1;
                    summary.collected += record.charged();
                } else {
                    summary.rejected += 1;
                }
                summary
            })
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{CoffeeMaker, Recipe};
    use proptest::prelude::*;

    fn outcomes() -> Vec<(PurchaseOutcome, Option<String>)> {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(Recipe::builder("Coffee").price("50").coffee("3").build().unwrap());

        vec![
            (maker.purchase(0, Money::from_units(75)), Some("Coffee".into())),
            (maker.purchase(0, Money::from_units(20)), Some("Coffee".into())),
            (maker.purchase(2, Money::from_units(50)), None),
            (maker.purchase(0, Money::from_units(50)), Some("Coffee".into())),
        ]
    }

    fn journal_of(capacity: usize) -> Journal {
        let mut journal = Journal::with_capacity(capacity);
        for (outcome, recipe) in outcomes() {
            journal.record(PurchaseRecord::from_outcome(&outcome, recipe));
        }
        journal
    }

    #[test]
    fn test_summary_counts_and_collected() {
        let summary = journal_of(10).summary();
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.collected, Money::from_units(100));
    }

    #[test]
    fn test_oldest_record_is_evicted() {
        let journal = journal_of(2);
        assert_eq!(journal.len(), 2);

        let slots: Vec<_> = journal.iter().map(|r| r.slot).collect();
        assert_eq!(slots, vec![2, 0]);
        assert!(journal.latest().unwrap().is_completed());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let journal = journal_of(0);
        assert_eq!(journal.capacity(), 1);
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_large_capacity_allocates_lazily() {
        let mut journal = Journal::with_capacity(usize::MAX);
        assert!(journal.is_empty());

        let (outcome, recipe) = outcomes().remove(0);
        journal.record(PurchaseRecord::from_outcome(&outcome, recipe));
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.capacity(), usize::MAX);
    }

    #[test]
    fn test_record_ids_are_unique() {
        let journal = journal_of(10);
        let mut ids: Vec<_> = journal.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_serialized_shape() {
        let journal = journal_of(10);
        let records: Vec<_> = journal.iter().collect();

        let completed = serde_json::to_value(records[0]).unwrap();
        assert_eq!(completed["status"], "completed");
        assert_eq!(completed["paid"], 75);
        assert_eq!(completed["change"], 25);
        assert_eq!(completed["recipe"], "Coffee");

        let empty = serde_json::to_value(records[2]).unwrap();
        assert_eq!(empty["status"]["rejected"]["reason"], "empty_slot");
        assert!(empty["recipe"].is_null());

        let short = serde_json::to_value(records[1]).unwrap();
        assert_eq!(short["status"]["rejected"]["reason"], "insufficient_funds");
        assert_eq!(short["status"]["rejected"]["price"], 50);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: the journal never exceeds its capacity and always keeps
        /// the most recent records in arrival order.
        #[test]
        fn keeps_newest_within_capacity(
            capacity in 1usize..8,
            slots in prop::collection::vec(0usize..5, 0..30),
        ) {
            let mut maker = CoffeeMaker::new();
            let mut journal = Journal::with_capacity(capacity);
            for &slot in &slots {
                let outcome = maker.purchase(slot, Money::from_units(10));
                journal.record(PurchaseRecord::from_outcome(&outcome, None));
            }

            prop_assert_eq!(journal.len(), slots.len().min(capacity));
            let kept: Vec<usize> = journal.iter().map(|r| r.slot).collect();
            prop_assert_eq!(&kept[..], &slots[slots.len() - kept.len()..]);
        }
    }

    #[test]
    fn test_clear() {
        let mut journal = journal_of(10);
        journal.clear();
        assert!(journal.is_empty());
        assert_eq!(journal.summary(), JournalSummary::default());
    }
}
