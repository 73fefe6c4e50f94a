//! Section query endpoints.
//!
//! - `GET /api/sections` — remaining/capacity report per section
//! - `GET /api/sections/:section/tickets` — stream the section's tickets

use super::TicketPayload;
use crate::error::AppError;
use crate::server::state::AppState;
use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use trainbook_core::SectionAvailability;

/// Per-section remaining/capacity report, sorted by section identifier.
pub async fn availability(
    State(state): State<AppState>,
) -> Json<Vec<SectionAvailability>> {
    Json(state.engine.availability().await)
}

/// Stream every live ticket in a section as newline-delimited JSON, one
/// ticket per line, in ledger insertion order.
///
/// The listing is a point-in-time scan: each request re-reads current
/// state, and a consumer disconnect aborts only the response stream, never
/// the engine. An empty section yields an empty body with `200 OK`.
///
/// # Errors
///
/// `400` for a section outside the configured set, `422` for an empty
/// section name.
pub async fn tickets_in_section(
    Path(section): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let tickets = state.engine.list_by_section(&section).await?;
    tracing::debug!(section = %section, matches = tickets.len(), "streaming section listing");

    let stream = async_stream::stream! {
        for ticket in tickets {
            match serde_json::to_vec(&TicketPayload::from(ticket)) {
                Ok(mut line) => {
                    line.push(b'\n');
                    yield Ok(Bytes::from(line));
                }
                Err(err) => {
                    // Abort the remaining scan; the engine is untouched.
                    yield Err(err);
                    break;
                }
            }
        }
    };

    Ok((
        [(header::CONTENT_TYPE, "application/x-ndjson")],
        Body::from_stream(stream),
    )
        .into_response())
}
