//! Typed service configuration for backend services.
//!
//! This crate provides the shared `Config` type and loaders for filling it
//! from TOML, YAML, JSON, and XML files, from environment variables, and
//! from `.env` files. Every loader resolves against the same built-in
//! defaults, so services read identical configuration regardless of where
//! it came from.

pub mod constants;
pub mod loader;
pub mod types;

pub use loader::{ConfigError, EnvSource, ProcessEnv, SourceFormat, XmlConfig};
pub use types::{Config, Database, DatabaseEngine, ExternalService, Server, ServiceKind, Token};
