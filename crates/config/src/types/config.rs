//! Root configuration structure.
//!
//! Responsibilities:
//! - Combine server, token, database, and external service settings.
//! - Provide lookup accessors keyed by `DatabaseEngine` / `ServiceKind`.
//! - Expose the engine-specific database connection address helpers.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Validation of resolved values.
//!
//! Invariants:
//! - `Config::default()` equals the result of loading empty input; it is the
//!   built-in default table every loader applies.
//! - `settings` is populated only by the environment loader.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::database::{Database, DatabaseEngine};
use crate::types::server::Server;
use crate::types::service::{ExternalService, ServiceKind};
use crate::types::token::Token;

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    pub server: Server,
    /// Session token settings.
    pub token: Token,
    /// MongoDB connection settings.
    pub mongodb: Database,
    /// MySQL connection settings.
    pub mysql: Database,
    /// PostgreSQL connection settings.
    pub postgres: Database,
    /// Audit sink integration.
    pub audit: ExternalService,
    /// Jaeger trace collector integration.
    pub jaeger: ExternalService,
    /// Loki log push integration.
    pub loki: ExternalService,
    /// Tempo trace ingest integration.
    pub tempo: ExternalService,
    /// Prometheus metrics integration.
    pub prometheus: ExternalService,
    /// Redis cache integration.
    pub redis: ExternalService,
    /// Deployment environment name (e.g., "production").
    pub environment: String,
    /// Service name, used for telemetry and logging downstream.
    pub service: String,
    /// Free-form key/value settings, populated by the environment loader.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl Default for Config {
    /// The built-in default table: the value produced by loading empty input.
    fn default() -> Self {
        Self {
            server: Server::default(),
            token: Token::default(),
            mongodb: Database::defaults_for(DatabaseEngine::MongoDb),
            mysql: Database::defaults_for(DatabaseEngine::MySql),
            postgres: Database::defaults_for(DatabaseEngine::Postgres),
            audit: ExternalService::defaults_for(ServiceKind::Audit),
            jaeger: ExternalService::defaults_for(ServiceKind::Jaeger),
            loki: ExternalService::defaults_for(ServiceKind::Loki),
            tempo: ExternalService::defaults_for(ServiceKind::Tempo),
            prometheus: ExternalService::defaults_for(ServiceKind::Prometheus),
            redis: ExternalService::defaults_for(ServiceKind::Redis),
            environment: String::new(),
            service: String::new(),
            settings: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Connection settings for the given engine.
    pub fn database(&self, engine: DatabaseEngine) -> &Database {
        match engine {
            DatabaseEngine::MongoDb => &self.mongodb,
            DatabaseEngine::MySql => &self.mysql,
            DatabaseEngine::Postgres => &self.postgres,
        }
    }

    /// Settings for the given external service.
    pub fn external_service(&self, kind: ServiceKind) -> &ExternalService {
        match kind {
            ServiceKind::Audit => &self.audit,
            ServiceKind::Jaeger => &self.jaeger,
            ServiceKind::Loki => &self.loki,
            ServiceKind::Tempo => &self.tempo,
            ServiceKind::Prometheus => &self.prometheus,
            ServiceKind::Redis => &self.redis,
        }
    }

    /// MongoDB connection address.
    pub fn mongodb_address(&self) -> String {
        self.mongodb.connection_address(DatabaseEngine::MongoDb)
    }

    /// MySQL DSN in `user:password@tcp(host:port)/database` form.
    pub fn mysql_address(&self) -> String {
        self.mysql.connection_address(DatabaseEngine::MySql)
    }

    /// PostgreSQL connection address.
    pub fn postgres_address(&self) -> String {
        self.postgres.connection_address(DatabaseEngine::Postgres)
    }
}
