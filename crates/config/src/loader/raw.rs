//! Intermediate representation decoded from configuration files.
//!
//! Responsibilities:
//! - Mirror the `Config` tree with every field optional, so decoding can
//!   tell absent fields apart from explicitly-written ones.
//! - Resolve the decoded tree onto the built-in defaults.
//!
//! Does NOT handle:
//! - Format-specific decoding (see the per-format loader modules).
//! - Environment variables (see `env.rs`; that channel has its own rules).
//!
//! Invariants:
//! - A scalar field present in the input always wins, even when it is zero.
//! - An empty string never overrides a non-empty built-in string default
//!   (migrations paths, service hosts); every database entry therefore has
//!   a non-empty `migrations_path` after resolution.
//! - A field absent from the input always takes the built-in default.
//! - Resolution is infallible; all validation happened during decoding.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::constants::DEFAULT_TOKEN_MAX_AGE_SECS;
use crate::types::{
    Config, Database, DatabaseEngine, ExternalService, Server, ServiceKind, Token,
};

/// Top-level mirror of `Config` with every section optional.
///
/// Unknown keys in the input are ignored, matching the usual serde
/// behavior; in particular a `settings` section in a file has no effect,
/// since that mapping belongs to the environment channel.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawConfig {
    pub server: Option<RawServer>,
    pub token: Option<RawToken>,
    pub mongodb: Option<RawDatabase>,
    pub mysql: Option<RawDatabase>,
    pub postgres: Option<RawDatabase>,
    pub audit: Option<RawExternalService>,
    pub jaeger: Option<RawExternalService>,
    pub loki: Option<RawExternalService>,
    pub tempo: Option<RawExternalService>,
    pub prometheus: Option<RawExternalService>,
    pub redis: Option<RawExternalService>,
    pub environment: Option<String>,
    pub service: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawServer {
    pub host: Option<String>,
    pub port: Option<u16>,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawToken {
    pub secret: Option<String>,
    pub max_age: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDatabase {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub migrations_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawExternalService {
    pub enabled: Option<bool>,
    pub host: Option<String>,
    pub token: Option<String>,
}

/// Keep a supplied non-empty value, otherwise fall back to the default.
fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

impl RawServer {
    fn resolve(self) -> Server {
        Server {
            host: self.host.unwrap_or_default(),
            port: self.port.unwrap_or_default(),
            allowed_origins: self.allowed_origins,
        }
    }
}

impl RawToken {
    fn resolve(self) -> Token {
        Token {
            secret: self.secret.unwrap_or_default(),
            max_age: self.max_age.unwrap_or(DEFAULT_TOKEN_MAX_AGE_SECS),
        }
    }
}

impl RawDatabase {
    fn resolve(self, engine: DatabaseEngine) -> Database {
        Database {
            host: self.host.unwrap_or_default(),
            port: self.port.unwrap_or(engine.default_port()),
            user: self.user.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            database: self.database.unwrap_or_default(),
            migrations_path: non_empty_or(
                self.migrations_path,
                engine.default_migrations_path(),
            ),
        }
    }
}

impl RawExternalService {
    fn resolve(self, kind: ServiceKind) -> ExternalService {
        ExternalService {
            enabled: self.enabled.unwrap_or(false),
            host: non_empty_or(self.host, kind.default_host()),
            token: self.token.unwrap_or_default(),
        }
    }
}

impl RawConfig {
    /// Overlay the decoded tree onto the built-in default table.
    pub(crate) fn into_config(self) -> Config {
        Config {
            server: self.server.unwrap_or_default().resolve(),
            token: self.token.unwrap_or_default().resolve(),
            mongodb: self
                .mongodb
                .unwrap_or_default()
                .resolve(DatabaseEngine::MongoDb),
            mysql: self
                .mysql
                .unwrap_or_default()
                .resolve(DatabaseEngine::MySql),
            postgres: self
                .postgres
                .unwrap_or_default()
                .resolve(DatabaseEngine::Postgres),
            audit: self.audit.unwrap_or_default().resolve(ServiceKind::Audit),
            jaeger: self
                .jaeger
                .unwrap_or_default()
                .resolve(ServiceKind::Jaeger),
            loki: self.loki.unwrap_or_default().resolve(ServiceKind::Loki),
            tempo: self.tempo.unwrap_or_default().resolve(ServiceKind::Tempo),
            prometheus: self
                .prometheus
                .unwrap_or_default()
                .resolve(ServiceKind::Prometheus),
            redis: self.redis.unwrap_or_default().resolve(ServiceKind::Redis),
            environment: self.environment.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            settings: BTreeMap::new(),
        }
    }
}
