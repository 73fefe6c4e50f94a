//! Inventory ledger: per-section remaining-seat counters.
//!
//! The ledger is pure bookkeeping. It enforces non-negativity on decrement
//! and nothing else; `increment` is the strict inverse of a prior
//! `decrement` and performs no upper-bound check, because capacities are
//! supplied once at start-up and callers only ever return seats they took.
//! It has no lookup by ticket.

use crate::types::Capacity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Returned by [`InventoryLedger::decrement`] when a section has no
/// remaining seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no remaining seats")]
pub struct Exhausted;

/// Remaining/capacity snapshot for one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAvailability {
    /// Section identifier
    pub section: String,
    /// Seats still free
    pub remaining: u32,
    /// Initial capacity
    pub capacity: Capacity,
}

/// Seat counter for one section.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SeatCounter {
    capacity: Capacity,
    remaining: u32,
}

/// Mapping from section identifier to remaining-seat count.
///
/// Unknown sections report zero remaining and are never created implicitly.
#[derive(Clone, Debug, Default)]
pub struct InventoryLedger {
    sections: HashMap<String, SeatCounter>,
}

impl InventoryLedger {
    /// Creates a ledger from the start-up capacity configuration.
    ///
    /// Every section starts with `remaining == capacity`.
    #[must_use]
    pub fn new(capacities: HashMap<String, Capacity>) -> Self {
        let sections = capacities
            .into_iter()
            .map(|(section, capacity)| {
                (
                    section,
                    SeatCounter {
                        capacity,
                        remaining: capacity.value(),
                    },
                )
            })
            .collect();
        Self { sections }
    }

    /// Returns the current free-seat count for a section.
    ///
    /// Unknown sections report zero remaining.
    #[must_use]
    pub fn remaining(&self, section: &str) -> u32 {
        self.sections.get(section).map_or(0, |c| c.remaining)
    }

    /// Returns the initial capacity of a section, if configured.
    #[must_use]
    pub fn capacity(&self, section: &str) -> Option<Capacity> {
        self.sections.get(section).map(|c| c.capacity)
    }

    /// Checks membership of a section in the configured set.
    #[must_use]
    pub fn contains(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Atomically takes one seat from a section.
    ///
    /// # Errors
    ///
    /// Returns [`Exhausted`] if `remaining(section) == 0`, which includes
    /// unknown sections. The ledger is unchanged on failure.
    pub fn decrement(&mut self, section: &str) -> Result<(), Exhausted> {
        match self.sections.get_mut(section) {
            Some(counter) if counter.remaining > 0 => {
                counter.remaining -= 1;
                Ok(())
            }
            _ => Err(Exhausted),
        }
    }

    /// Returns one seat to a section.
    ///
    /// Strict inverse of a prior [`decrement`](Self::decrement); no check
    /// against the initial capacity is performed here. Unknown sections are
    /// ignored (a seat can only be returned where one was taken).
    pub fn increment(&mut self, section: &str) {
        if let Some(counter) = self.sections.get_mut(section) {
            counter.remaining += 1;
        }
    }

    /// Remaining/capacity snapshot of every configured section, sorted by
    /// section identifier.
    #[must_use]
    pub fn availability(&self) -> Vec<SectionAvailability> {
        let mut report: Vec<SectionAvailability> = self
            .sections
            .iter()
            .map(|(section, counter)| SectionAvailability {
                section: section.clone(),
                remaining: counter.remaining,
                capacity: counter.capacity,
            })
            .collect();
        report.sort_by(|a, b| a.section.cmp(&b.section));
        report
    }
}
