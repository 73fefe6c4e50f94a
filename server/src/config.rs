//! Configuration management for the reservation server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Section capacities are supplied once here and never revisited; the
//! engine is the only capacity authority after start-up.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use trainbook_core::Capacity;

/// Default section layout of the observed system: two sections of twenty
/// seats each.
const DEFAULT_CAPACITIES: &str = "A=20,B=20";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application server configuration
    pub server: ServerConfig,
    /// Initial seat capacity per section
    pub capacities: HashMap<String, Capacity>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or malformed variables fall back to defaults; in particular a
    /// malformed `SECTION_CAPACITIES` falls back to the stock `A=20,B=20`
    /// layout rather than starting with an empty seat pool.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            capacities: env::var("SECTION_CAPACITIES")
                .ok()
                .and_then(|raw| parse_capacities(&raw))
                .unwrap_or_else(|| {
                    // Parsed from a literal; cannot fail.
                    parse_capacities(DEFAULT_CAPACITIES).unwrap_or_default()
                }),
        }
    }

    /// The socket address string to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parses a `NAME=COUNT,NAME=COUNT` capacity list.
///
/// Returns `None` if any entry is malformed, so a typo disables the whole
/// variable instead of silently dropping sections.
fn parse_capacities(raw: &str) -> Option<HashMap<String, Capacity>> {
    let mut capacities = HashMap::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, count) = entry.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let count: u32 = count.trim().parse().ok()?;
        capacities.insert(name.to_string(), Capacity::new(count));
    }
    if capacities.is_empty() {
        None
    } else {
        Some(capacities)
    }
}
