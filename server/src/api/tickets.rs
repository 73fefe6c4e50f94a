//! Ticket lifecycle endpoints.
//!
//! - `POST /api/tickets` — purchase a ticket
//! - `GET /api/tickets/:email` — fetch the receipt for an owner
//! - `DELETE /api/tickets/:email` — cancel the owner's ticket
//! - `PUT /api/tickets/:email/section` — move the owner's ticket

use super::{OwnerPayload, TicketPayload};
use crate::error::AppError;
use crate::server::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use trainbook_core::{Money, Owner, PurchaseRequest};

/// Request to purchase a ticket.
#[derive(Debug, Deserialize)]
pub struct PurchaseTicketRequest {
    /// Departure station
    pub origin: String,
    /// Arrival station
    pub destination: String,
    /// Ticket holder
    pub owner: OwnerPayload,
    /// Price in cents
    pub price_cents: u64,
    /// Section to allocate a seat in
    pub section: String,
}

/// Request to move a ticket to another section.
#[derive(Debug, Deserialize)]
pub struct ModifySeatRequest {
    /// Destination section
    pub section: String,
}

/// Purchase a ticket.
///
/// # Errors
///
/// `422` on empty required fields, `409` when the section is sold out or
/// the owner already holds a live ticket.
pub async fn purchase_ticket(
    State(state): State<AppState>,
    Json(request): Json<PurchaseTicketRequest>,
) -> Result<(StatusCode, Json<TicketPayload>), AppError> {
    let ticket = state
        .engine
        .purchase(PurchaseRequest {
            origin: request.origin,
            destination: request.destination,
            owner: Owner::new(
                request.owner.first_name,
                request.owner.last_name,
                request.owner.email,
            ),
            price: Money::from_cents(request.price_cents),
            section: request.section,
        })
        .await?;

    tracing::info!(
        email = %ticket.owner.email,
        section = %ticket.section,
        "ticket purchased"
    );
    Ok((StatusCode::CREATED, Json(ticket.into())))
}

/// Fetch the receipt for an owner email.
///
/// # Errors
///
/// `404` if the owner holds no live ticket.
pub async fn get_receipt(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TicketPayload>, AppError> {
    let ticket = state.engine.fetch_by_owner(&email).await?;
    Ok(Json(ticket.into()))
}

/// Cancel the live ticket for an owner email.
///
/// Returns the removed ticket; its seat goes back to the section pool.
///
/// # Errors
///
/// `404` if the owner holds no live ticket.
pub async fn cancel_ticket(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TicketPayload>, AppError> {
    let ticket = state.engine.cancel(&email).await?;
    tracing::info!(email = %email, section = %ticket.section, "ticket cancelled");
    Ok(Json(ticket.into()))
}

/// Move the owner's ticket to another section.
///
/// # Errors
///
/// `404` if the owner holds no live ticket, `400` for an unconfigured
/// destination section, `409` when the destination is sold out.
pub async fn modify_seat(
    Path(email): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<ModifySeatRequest>,
) -> Result<Json<TicketPayload>, AppError> {
    let ticket = state.engine.modify_section(&email, &request.section).await?;
    tracing::info!(email = %email, section = %ticket.section, "seat moved");
    Ok(Json(ticket.into()))
}
