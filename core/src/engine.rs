//! Reservation engine: the ticket-ledger state machine.
//!
//! Per-ticket lifecycle: `absent -> booked -> (booked' on modify) -> absent`
//! (on cancel). There are no other states; no ticket is ever created or
//! destroyed by any other path.
//!
//! The engine is split the same way the rest of this codebase separates pure
//! transitions from their runtime: [`EngineState`] implements the five
//! operations as plain synchronous methods over the ticket ledger and the
//! [`InventoryLedger`], and [`ReservationEngine`] wraps that state in a
//! single `RwLock` shared by every request-handling task. One
//! mutual-exclusion domain covers both the ticket list and the seat
//! counters, so a purchase can never observe a half-updated count and a
//! listing can never iterate a collection being compacted.

use crate::error::EngineError;
use crate::ledger::{InventoryLedger, SectionAvailability};
use crate::types::{Capacity, Money, Owner, Ticket};
use std::collections::HashMap;
use tokio::sync::RwLock;

// ============================================================================
// Requests
// ============================================================================

/// Input to [`ReservationEngine::purchase`].
#[derive(Clone, Debug)]
pub struct PurchaseRequest {
    /// Departure station
    pub origin: String,
    /// Arrival station
    pub destination: String,
    /// Holder of the ticket; the engine keeps a private copy
    pub owner: Owner,
    /// Price paid
    pub price: Money,
    /// Section to allocate a seat in
    pub section: String,
}

fn require(field: &'static str, value: &str) -> Result<(), EngineError> {
    if value.is_empty() {
        Err(EngineError::Validation { field })
    } else {
        Ok(())
    }
}

// ============================================================================
// Pure state machine
// ============================================================================

/// The engine's guarded state: the ordered collection of live tickets plus
/// the seat counters, mutated together under one lock.
///
/// All transitions are synchronous and total: they either fully apply or
/// return an [`EngineError`] with state untouched.
#[derive(Clone, Debug)]
pub struct EngineState {
    tickets: Vec<Ticket>,
    inventory: InventoryLedger,
}

impl EngineState {
    /// Creates an empty ledger over the start-up capacity configuration.
    #[must_use]
    pub fn new(capacities: HashMap<String, Capacity>) -> Self {
        Self {
            tickets: Vec::new(),
            inventory: InventoryLedger::new(capacities),
        }
    }

    fn find(&self, email: &str) -> Option<usize> {
        self.tickets
            .iter()
            .position(|t| t.owner.email.as_str() == email)
    }

    /// Books a seat: takes one seat from the section and appends a new live
    /// ticket.
    ///
    /// At most one live ticket per owner email is permitted; a second
    /// purchase under a live email is rejected before the ledger is touched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] if any required field is empty.
    /// - [`EngineError::DuplicateOwner`] if a live ticket already exists for
    ///   the owner's email.
    /// - [`EngineError::NoAvailableSeats`] if the section has no remaining
    ///   seats (unknown sections included).
    pub fn purchase(&mut self, request: PurchaseRequest) -> Result<Ticket, EngineError> {
        require("origin", &request.origin)?;
        require("destination", &request.destination)?;
        require("section", &request.section)?;
        require("first_name", &request.owner.first_name)?;
        require("last_name", &request.owner.last_name)?;
        require("email", request.owner.email.as_str())?;

        if self.find(request.owner.email.as_str()).is_some() {
            return Err(EngineError::DuplicateOwner {
                email: request.owner.email.to_string(),
            });
        }

        self.inventory
            .decrement(&request.section)
            .map_err(|_| EngineError::NoAvailableSeats {
                section: request.section.clone(),
            })?;

        let ticket = Ticket::new(
            request.origin,
            request.destination,
            request.owner,
            request.price,
            request.section,
        );
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Returns the live ticket for an owner email.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] if the email is empty.
    /// - [`EngineError::NotFound`] if no live ticket matches.
    pub fn fetch_by_owner(&self, email: &str) -> Result<Ticket, EngineError> {
        require("email", email)?;
        self.find(email)
            .map(|i| self.tickets[i].clone())
            .ok_or_else(|| EngineError::NotFound {
                email: email.to_string(),
            })
    }

    /// Returns every live ticket in a section, in ledger insertion order.
    ///
    /// An empty result for a configured section is a success, not an error.
    /// Each call re-scans current state; nothing is held open between calls.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] if the section is empty.
    /// - [`EngineError::InvalidSection`] if the section is not configured.
    pub fn list_by_section(&self, section: &str) -> Result<Vec<Ticket>, EngineError> {
        require("section", section)?;
        if !self.inventory.contains(section) {
            return Err(EngineError::InvalidSection {
                section: section.to_string(),
            });
        }
        Ok(self
            .tickets
            .iter()
            .filter(|t| t.section == section)
            .cloned()
            .collect())
    }

    /// Removes the live ticket for an owner email and returns its seat to
    /// the section it was booked in.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] if the email is empty.
    /// - [`EngineError::NotFound`] if no live ticket matches; no mutation is
    ///   attempted.
    pub fn cancel(&mut self, email: &str) -> Result<Ticket, EngineError> {
        require("email", email)?;
        let index = self.find(email).ok_or_else(|| EngineError::NotFound {
            email: email.to_string(),
        })?;
        let ticket = self.tickets.remove(index);
        self.inventory.increment(&ticket.section);
        Ok(ticket)
    }

    /// Moves the live ticket for an owner email into another section.
    ///
    /// The move is a fused cancel-and-repurchase: one seat is taken from the
    /// destination section and one returned to the source section before the
    /// ticket's section field is overwritten in place. Insertion order is
    /// preserved. Moving a ticket to the section it is already in succeeds
    /// without touching the counters.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] if email or section is empty.
    /// - [`EngineError::NotFound`] if no live ticket matches.
    /// - [`EngineError::InvalidSection`] if the destination section is not
    ///   configured.
    /// - [`EngineError::NoAvailableSeats`] if the destination section is
    ///   exhausted; state is untouched.
    pub fn modify_section(&mut self, email: &str, section: &str) -> Result<Ticket, EngineError> {
        require("email", email)?;
        require("section", section)?;

        let index = self.find(email).ok_or_else(|| EngineError::NotFound {
            email: email.to_string(),
        })?;
        if self.tickets[index].section == section {
            return Ok(self.tickets[index].clone());
        }
        if !self.inventory.contains(section) {
            return Err(EngineError::InvalidSection {
                section: section.to_string(),
            });
        }

        self.inventory
            .decrement(section)
            .map_err(|_| EngineError::NoAvailableSeats {
                section: section.to_string(),
            })?;
        let previous = self.tickets[index].section.clone();
        self.inventory.increment(&previous);
        self.tickets[index].section = section.to_string();
        Ok(self.tickets[index].clone())
    }

    /// Current free-seat count for a section.
    #[must_use]
    pub fn remaining(&self, section: &str) -> u32 {
        self.inventory.remaining(section)
    }

    /// Remaining/capacity snapshot of every configured section.
    #[must_use]
    pub fn availability(&self) -> Vec<SectionAvailability> {
        self.inventory.availability()
    }

    /// Number of live tickets across all sections.
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }
}

// ============================================================================
// Locked façade
// ============================================================================

/// The reservation engine shared by every request handler.
///
/// Constructed once at process start and passed around by `Arc`; never
/// recreated per request. Mutating operations take the write lock, read-only
/// operations the read lock, and callers only ever receive owned [`Ticket`]
/// values, never references into the guarded state.
#[derive(Debug)]
pub struct ReservationEngine {
    state: RwLock<EngineState>,
}

impl ReservationEngine {
    /// Creates an engine over the start-up capacity configuration.
    #[must_use]
    pub fn new(capacities: HashMap<String, Capacity>) -> Self {
        Self {
            state: RwLock::new(EngineState::new(capacities)),
        }
    }

    /// Books a seat and returns the created ticket.
    ///
    /// # Errors
    ///
    /// See [`EngineState::purchase`].
    pub async fn purchase(&self, request: PurchaseRequest) -> Result<Ticket, EngineError> {
        self.state.write().await.purchase(request)
    }

    /// Returns the live ticket for an owner email.
    ///
    /// # Errors
    ///
    /// See [`EngineState::fetch_by_owner`].
    pub async fn fetch_by_owner(&self, email: &str) -> Result<Ticket, EngineError> {
        self.state.read().await.fetch_by_owner(email)
    }

    /// Returns every live ticket in a section, in ledger insertion order.
    ///
    /// # Errors
    ///
    /// See [`EngineState::list_by_section`].
    pub async fn list_by_section(&self, section: &str) -> Result<Vec<Ticket>, EngineError> {
        self.state.read().await.list_by_section(section)
    }

    /// Cancels the live ticket for an owner email and returns it.
    ///
    /// # Errors
    ///
    /// See [`EngineState::cancel`].
    pub async fn cancel(&self, email: &str) -> Result<Ticket, EngineError> {
        self.state.write().await.cancel(email)
    }

    /// Moves the live ticket for an owner email into another section.
    ///
    /// # Errors
    ///
    /// See [`EngineState::modify_section`].
    pub async fn modify_section(&self, email: &str, section: &str) -> Result<Ticket, EngineError> {
        self.state.write().await.modify_section(email, section)
    }

    /// Current free-seat count for a section.
    pub async fn remaining(&self, section: &str) -> u32 {
        self.state.read().await.remaining(section)
    }

    /// Remaining/capacity snapshot of every configured section.
    pub async fn availability(&self) -> Vec<SectionAvailability> {
        self.state.read().await.availability()
    }
}
