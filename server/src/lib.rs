//! # Trainbook Server
//!
//! HTTP surface for the train reservation engine.
//!
//! This crate is the thin plumbing around [`trainbook_core`]: it translates
//! JSON requests into engine operations, maps engine failures onto HTTP
//! statuses, and streams section listings one ticket at a time. Business
//! rules live entirely in the core crate.
//!
//! ## Layout
//!
//! - [`config`]: environment-driven configuration, including the start-up
//!   section capacities.
//! - [`server`]: router construction, shared application state, health
//!   probes.
//! - [`api`]: one handler module per resource.
//! - [`error`]: the `AppError` bridge from engine errors to HTTP responses.

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::AppError;
pub use server::{build_router, AppState};
