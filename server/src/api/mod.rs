//! HTTP handlers, one module per resource.

pub mod sections;
pub mod tickets;

use serde::{Deserialize, Serialize};
use trainbook_core::{Owner, Ticket};

/// Ticket owner as it travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerPayload {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Unique lookup key
    pub email: String,
}

impl From<Owner> for OwnerPayload {
    fn from(owner: Owner) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            email: owner.email.to_string(),
        }
    }
}

/// Ticket as it travels on the wire. Prices are carried in minor units
/// (`price_cents`) to keep arithmetic exact end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketPayload {
    /// Departure station
    pub origin: String,
    /// Arrival station
    pub destination: String,
    /// Holder of the ticket
    pub owner: OwnerPayload,
    /// Price in cents
    pub price_cents: u64,
    /// Section the seat is allocated in
    pub section: String,
}

impl From<Ticket> for TicketPayload {
    fn from(ticket: Ticket) -> Self {
        Self {
            origin: ticket.origin,
            destination: ticket.destination,
            price_cents: ticket.price.cents(),
            section: ticket.section,
            owner: ticket.owner.into(),
        }
    }
}
