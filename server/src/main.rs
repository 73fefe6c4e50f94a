//! Reservation HTTP server.
//!
//! Holds the seat inventory and ticket ledger in memory for the lifetime of
//! one running process; capacities come from the environment at start-up.

use std::sync::Arc;
use trainbook_core::ReservationEngine;
use trainbook_server::{build_router, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trainbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Trainbook reservation server");

    // Load configuration
    let config = Config::from_env();
    let sections: Vec<String> = config
        .capacities
        .iter()
        .map(|(name, capacity)| format!("{name}={capacity}"))
        .collect();
    info!(sections = ?sections, "Configuration loaded");

    // The engine is constructed once and shared by every request handler.
    let engine = Arc::new(ReservationEngine::new(config.capacities.clone()));
    let app = build_router(AppState::new(engine));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl-C handler");
    }
    info!("Shutdown signal received");
}
