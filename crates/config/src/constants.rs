//! Centralized default values for service configuration.
//!
//! This module contains the built-in defaults applied when a field is
//! absent from the configuration source. Values are kept in one place to
//! avoid magic value duplication across loaders, and must not change:
//! existing deployments depend on them.

// =============================================================================
// Database Defaults
// =============================================================================

/// Default MongoDB port.
pub const DEFAULT_MONGO_PORT: u16 = 27017;

/// Default MySQL port.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default PostgreSQL port.
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default location of MongoDB schema migration scripts.
pub const DEFAULT_MONGO_MIGRATIONS: &str = "file://migrations/mongo";

/// Default location of MySQL schema migration scripts.
pub const DEFAULT_MYSQL_MIGRATIONS: &str = "file://migrations/mysql";

/// Default location of PostgreSQL schema migration scripts.
pub const DEFAULT_POSTGRES_MIGRATIONS: &str = "file://migrations/postgres";

// =============================================================================
// Session Token Defaults
// =============================================================================

/// Default session token max age in seconds (24 hours).
pub const DEFAULT_TOKEN_MAX_AGE_SECS: u64 = 86400;

// =============================================================================
// External Service Host Defaults
// =============================================================================

/// Default Loki log push endpoint.
pub const DEFAULT_LOKI_HOST: &str = "http://localhost:3100/loki/api/v1/push";

/// Default Tempo OTLP trace ingest endpoint.
pub const DEFAULT_TEMPO_HOST: &str = "http://localhost:4318/v1/traces";

/// Default Jaeger collector endpoint.
pub const DEFAULT_JAEGER_HOST: &str = "http://localhost:14268/api/traces";

/// Default Redis address.
pub const DEFAULT_REDIS_HOST: &str = "localhost:6379";
