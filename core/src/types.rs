//! Domain types for the reservation engine.
//!
//! Value objects are kept deliberately small: a ticket is addressed by its
//! owner's email, sections are plain string keys, and prices are carried in
//! cents to keep arithmetic exact.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Owner
// ============================================================================

/// Email address of a ticket owner.
///
/// This is the unique lookup key for all ticket operations. Values are
/// stored as given and compared byte-for-byte; no case folding or format
/// validation is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The person a ticket is booked for.
///
/// First and last name are descriptive only; the email is the key used for
/// every lookup. Identity is immutable once attached to a ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Unique lookup key
    pub email: Email,
}

impl Owner {
    /// Creates a new `Owner`.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: Email::new(email),
        }
    }
}

// ============================================================================
// Money (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole dollars with overflow checking.
    #[must_use]
    pub const fn checked_from_dollars(dollars: u64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole dollars (rounded down).
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.0 % 100)
    }
}

// ============================================================================
// Capacity
// ============================================================================

/// Initial seat count of a section, supplied once at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a new `Capacity`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the capacity value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// One issued reservation.
///
/// A ticket exists only inside the engine's ledger and carries no identity
/// field of its own; it is addressed by owner email, of which at most one
/// live ticket exists at any time. The engine stores a private copy of the
/// owner so later mutation of a caller-supplied value cannot corrupt ledger
/// state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Departure station
    pub origin: String,
    /// Arrival station
    pub destination: String,
    /// Holder of the ticket, by value
    pub owner: Owner,
    /// Price paid
    pub price: Money,
    /// Section the seat is allocated in
    pub section: String,
}

impl Ticket {
    /// Creates a new `Ticket`.
    #[must_use]
    pub const fn new(
        origin: String,
        destination: String,
        owner: Owner,
        price: Money,
        section: String,
    ) -> Self {
        Self {
            origin,
            destination,
            owner,
            price,
            section,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn money_display_formats_cents() {
        assert_eq!(Money::from_cents(2000).to_string(), "$20.00");
        assert_eq!(Money::from_cents(105).to_string(), "$1.05");
    }

    #[test]
    fn money_checked_from_dollars() {
        assert_eq!(
            Money::checked_from_dollars(20),
            Some(Money::from_cents(2000))
        );
        assert_eq!(Money::checked_from_dollars(u64::MAX), None);
    }

    #[test]
    fn email_compares_byte_for_byte() {
        assert_ne!(Email::new("A@example.com"), Email::new("a@example.com"));
    }

    #[test]
    fn owner_carries_email_key() {
        let owner = Owner::new("Deepak", "Kumar", "deepak@example.com");
        assert_eq!(owner.email.as_str(), "deepak@example.com");
    }
}
