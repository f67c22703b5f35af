//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved configuration tree (server, token, databases,
//!   external services).
//! - Carry per-engine and per-service defaults on the `DatabaseEngine` and
//!   `ServiceKind` enums.
//! - Format bind and database connection addresses.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - The optional-field intermediate representation (see `loader`).
//!
//! Invariants:
//! - `Config::default()` is the built-in default table shared by all loaders.
//! - Formatting helpers interpolate values verbatim (no escaping).

mod config;
mod database;
mod server;
mod service;
mod token;

pub use config::Config;
pub use database::{Database, DatabaseEngine};
pub use server::Server;
pub use service::{ExternalService, ServiceKind};
pub use token::Token;
