//! Error taxonomy for the reservation engine.
//!
//! Every operation either fully succeeds or fails with exactly one of these
//! kinds, leaving state exactly as before the call. The engine never retries
//! internally and performs no logging; surfacing failures is the caller's
//! job.

use thiserror::Error;

/// Failure kinds of the reservation engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A required field was missing or empty. Detected before touching
    /// state; no side effect.
    #[error("required field `{field}` is empty")]
    Validation {
        /// Name of the offending field
        field: &'static str,
    },

    /// The section's seat capacity is exhausted. The ledger is unchanged.
    #[error("no available seats in section {section}")]
    NoAvailableSeats {
        /// Section that was requested
        section: String,
    },

    /// No live ticket matches the owner key. No mutation was attempted.
    #[error("ticket not found for user with email: {email}")]
    NotFound {
        /// Email that was looked up
        email: String,
    },

    /// The section is not part of the configured section set.
    #[error("unknown section: {section}")]
    InvalidSection {
        /// Section that was requested
        section: String,
    },

    /// A live ticket already exists for this email. At most one live ticket
    /// per owner is permitted.
    #[error("a live ticket already exists for email: {email}")]
    DuplicateOwner {
        /// Email that already holds a ticket
        email: String,
    },
}
