//! # Trainbook Core
//!
//! Seat-inventory and ticket-ledger state machine for the train reservation
//! service.
//!
//! This crate owns the only part of the system with a real correctness
//! property: seats are never oversold, ticket transitions are atomic with
//! respect to concurrent requests, and every operation leaves the ticket
//! ledger and the seat counters mutually consistent.
//!
//! ## Components
//!
//! - [`InventoryLedger`]: per-section remaining-seat counters. Pure
//!   bookkeeping, no ticket lookup.
//! - [`EngineState`]: the pure state machine over the ticket ledger and the
//!   inventory. Synchronous, trivially testable.
//! - [`ReservationEngine`]: the shared façade request handlers call into.
//!   Wraps [`EngineState`] in a single read/write lock so that every
//!   operation is indivisible with respect to any other.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use trainbook_core::{Capacity, Money, Owner, PurchaseRequest, ReservationEngine};
//!
//! # tokio_test::block_on(async {
//! let capacities = HashMap::from([("A".to_string(), Capacity::new(20))]);
//! let engine = ReservationEngine::new(capacities);
//!
//! let ticket = engine
//!     .purchase(PurchaseRequest {
//!         origin: "London".to_string(),
//!         destination: "Paris".to_string(),
//!         owner: Owner::new("Deepak", "Kumar", "deepak@example.com"),
//!         price: Money::from_cents(2000),
//!         section: "A".to_string(),
//!     })
//!     .await
//!     .unwrap();
//!
//! assert_eq!(ticket.section, "A");
//! assert_eq!(engine.remaining("A").await, 19);
//! # });
//! ```

pub mod engine;
pub mod error;
pub mod ledger;
pub mod types;

pub use engine::{EngineState, PurchaseRequest, ReservationEngine};
pub use error::EngineError;
pub use ledger::{InventoryLedger, SectionAvailability};
pub use types::{Capacity, Email, Money, Owner, Ticket};
