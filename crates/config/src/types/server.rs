//! HTTP server configuration.
//!
//! Responsibilities:
//! - Define the listen settings (host, port) and allowed CORS origins.
//! - Format the `host:port` bind address.
//!
//! Does NOT handle:
//! - Loading or defaulting of raw input (see `loader` module).
//! - Validation of host syntax or port reachability.
//!
//! Invariants:
//! - `allowed_origins` preserves input order and may be empty.
//! - `address()` interpolates values verbatim, without validation.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Host name or address the server binds to.
    pub host: String,
    /// TCP port the server listens on.
    pub port: u16,
    /// Origins accepted by the CORS layer, in input order.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Server {
    /// Format the bind address as `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
