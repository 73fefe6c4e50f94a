//! Application state for the reservation HTTP server.

use std::sync::Arc;
use trainbook_core::ReservationEngine;

/// Application state shared across all HTTP handlers.
///
/// Holds the one long-lived [`ReservationEngine`] instance; it is cloned
/// (cheaply via `Arc`) for each request and never recreated.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide reservation engine
    pub engine: Arc<ReservationEngine>,
}

impl AppState {
    /// Create a new application state around the shared engine.
    #[must_use]
    pub fn new(engine: Arc<ReservationEngine>) -> Self {
        Self { engine }
    }
}
