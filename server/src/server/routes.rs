//! Router configuration for the reservation server.
//!
//! Builds the complete Axum router with all endpoints.

use super::health::{health_check, readiness_check};
use super::state::AppState;
use crate::api::{sections, tickets};
use axum::{
    routing::{get, post, put},
    Router,
};

/// Build the complete Axum router.
///
/// One route per engine operation, plus the availability report and the
/// health probes:
/// - `POST /api/tickets` — purchase a ticket
/// - `GET /api/tickets/:email` — fetch a receipt
/// - `DELETE /api/tickets/:email` — cancel a ticket
/// - `PUT /api/tickets/:email/section` — move a ticket to another section
/// - `GET /api/sections` — per-section availability
/// - `GET /api/sections/:section/tickets` — stream tickets in a section
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/tickets", post(tickets::purchase_ticket))
        .route(
            "/tickets/:email",
            get(tickets::get_receipt).delete(tickets::cancel_ticket),
        )
        .route("/tickets/:email/section", put(tickets::modify_seat))
        .route("/sections", get(sections::availability))
        .route("/sections/:section/tickets", get(sections::tickets_in_section));

    Router::new()
        // Health checks (no state needed)
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // API routes under /api prefix
        .nest("/api", api_routes)
        .with_state(state)
}
