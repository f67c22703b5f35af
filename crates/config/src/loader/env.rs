//! Environment variable configuration loading.
//!
//! Responsibilities:
//! - Define the `EnvSource` abstraction over named string variables.
//! - Parse integer, boolean, origin-list, and settings-map variables.
//! - Assemble a full `Config` from an `EnvSource`, applying the built-in
//!   defaults.
//!
//! Does NOT handle:
//! - `.env` files (see `dotenv.rs`; it funnels into this module).
//! - File-based loading (see the per-format loader modules).
//!
//! Invariants:
//! - Unset and empty variables are equivalent; both mean "use the default".
//! - Boolean variables accept exactly `1`, `true`, `TRUE`, `True` as true
//!   and `0`, `false`, `FALSE`, `False`, empty as false. Other spellings
//!   (`tRuE`, `yes`) are rejected.
//! - Parse errors name the offending variable and abort the whole load.

use std::collections::{BTreeMap, HashMap};

use super::error::ConfigError;
use crate::constants::DEFAULT_TOKEN_MAX_AGE_SECS;
use crate::types::{
    Config, Database, DatabaseEngine, ExternalService, Server, ServiceKind, Token,
};

/// Read access to named string variables.
///
/// The process environment is the production source; map sources keep
/// tests deterministic without mutating process-global state.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Load configuration from the process environment.
pub fn from_env() -> Result<Config, ConfigError> {
    from_source(&ProcessEnv)
}

/// Load configuration from the given variable source.
///
/// The first malformed integer or boolean aborts the load; no partial
/// value is produced.
pub fn from_source(source: &impl EnvSource) -> Result<Config, ConfigError> {
    Ok(Config {
        server: server_from(source)?,
        token: token_from(source)?,
        mongodb: database_from(source, DatabaseEngine::MongoDb)?,
        mysql: database_from(source, DatabaseEngine::MySql)?,
        postgres: database_from(source, DatabaseEngine::Postgres)?,
        audit: service_from(source, ServiceKind::Audit)?,
        jaeger: service_from(source, ServiceKind::Jaeger)?,
        loki: service_from(source, ServiceKind::Loki)?,
        tempo: service_from(source, ServiceKind::Tempo)?,
        prometheus: service_from(source, ServiceKind::Prometheus)?,
        redis: service_from(source, ServiceKind::Redis)?,
        environment: raw_var(source, "ENVIRONMENT"),
        service: raw_var(source, "SERVICE"),
        settings: settings_from(source),
    })
}

/// Variable value with unset mapped to the empty string; every rule in
/// this module treats the two identically.
fn raw_var(source: &impl EnvSource, key: &str) -> String {
    source.var(key).unwrap_or_default()
}

/// String variable with a default for the unset/empty case.
fn string_or(source: &impl EnvSource, key: &str, default: &str) -> String {
    let value = raw_var(source, key);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Integer variable with a default for the unset/empty case.
///
/// Non-empty values that fail to parse abort the load, naming the
/// variable in the error.
fn int_or<T>(source: &impl EnvSource, key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = raw_var(source, key);
    if value.is_empty() {
        return Ok(default);
    }
    value.parse::<T>().map_err(|e| ConfigError::InvalidInt {
        var: key.to_string(),
        message: e.to_string(),
    })
}

/// Boolean variable over the fixed literal sets.
fn bool_var(source: &impl EnvSource, key: &str) -> Result<bool, ConfigError> {
    let value = raw_var(source, key);
    match value.as_str() {
        "1" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: key.to_string(),
            value,
        }),
    }
}

fn server_from(source: &impl EnvSource) -> Result<Server, ConfigError> {
    let origins = raw_var(source, "SERVER_ALLOWED_ORIGINS");
    // Splitting an empty string would yield one empty origin; guard it.
    let allowed_origins = if origins.is_empty() {
        Vec::new()
    } else {
        origins.split(',').map(str::to_string).collect()
    };
    Ok(Server {
        host: raw_var(source, "SERVER_HOST"),
        port: int_or(source, "SERVER_PORT", 0)?,
        allowed_origins,
    })
}

fn token_from(source: &impl EnvSource) -> Result<Token, ConfigError> {
    Ok(Token {
        secret: raw_var(source, "TOKEN_SECRET"),
        max_age: int_or(source, "TOKEN_MAX_AGE", DEFAULT_TOKEN_MAX_AGE_SECS)?,
    })
}

fn database_from(
    source: &impl EnvSource,
    engine: DatabaseEngine,
) -> Result<Database, ConfigError> {
    let prefix = engine.env_prefix();
    Ok(Database {
        host: raw_var(source, &format!("{prefix}_HOST")),
        port: int_or(source, &format!("{prefix}_PORT"), engine.default_port())?,
        user: raw_var(source, &format!("{prefix}_USER")),
        password: raw_var(source, &format!("{prefix}_PASSWORD")),
        database: raw_var(source, &format!("{prefix}_DATABASE")),
        migrations_path: string_or(
            source,
            &format!("{prefix}_MIGRATIONS_PATH"),
            engine.default_migrations_path(),
        ),
    })
}

fn service_from(
    source: &impl EnvSource,
    kind: ServiceKind,
) -> Result<ExternalService, ConfigError> {
    let prefix = kind.env_prefix();
    Ok(ExternalService {
        enabled: bool_var(source, &format!("{prefix}_ENABLED"))?,
        host: string_or(source, &format!("{prefix}_HOST"), kind.default_host()),
        token: raw_var(source, &format!("{prefix}_TOKEN")),
    })
}

/// Parse the flat `SETTINGS` list (`key=value` pairs separated by commas).
///
/// Each entry splits on its first `=`, so values may contain `=`. Entries
/// with no `=` are skipped with a warning; they never fail the load.
fn settings_from(source: &impl EnvSource) -> BTreeMap<String, String> {
    let raw = raw_var(source, "SETTINGS");
    let mut settings = BTreeMap::new();
    if raw.is_empty() {
        return settings;
    }
    for entry in raw.split(',') {
        match entry.split_once('=') {
            Some((key, value)) => {
                settings.insert(key.to_string(), value.to_string());
            }
            None => {
                tracing::warn!(entry, "skipping malformed SETTINGS entry");
            }
        }
    }
    settings
}
