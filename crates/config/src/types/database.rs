//! Database connection configuration.
//!
//! Responsibilities:
//! - Define the per-engine connection settings (host, port, credentials, schema).
//! - Carry per-engine defaults (port, migrations path) on `DatabaseEngine`.
//! - Format engine-specific connection addresses.
//!
//! Does NOT handle:
//! - Loading or defaulting of raw input (see `loader` module).
//! - Escaping of credentials in formatted addresses (values are verbatim).
//!
//! Invariants:
//! - Field names are stable across all serialization formats.
//! - `DatabaseEngine` is the single source for per-engine default values.
//! - Connection address templates are fixed; downstream drivers depend on
//!   their exact shape.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MONGO_MIGRATIONS, DEFAULT_MONGO_PORT, DEFAULT_MYSQL_MIGRATIONS, DEFAULT_MYSQL_PORT,
    DEFAULT_POSTGRES_MIGRATIONS, DEFAULT_POSTGRES_PORT,
};

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    MongoDb,
    MySql,
    Postgres,
}

impl DatabaseEngine {
    /// All engines, in configuration order.
    pub const ALL: [DatabaseEngine; 3] = [
        DatabaseEngine::MongoDb,
        DatabaseEngine::MySql,
        DatabaseEngine::Postgres,
    ];

    /// Default TCP port for the engine.
    pub fn default_port(self) -> u16 {
        match self {
            DatabaseEngine::MongoDb => DEFAULT_MONGO_PORT,
            DatabaseEngine::MySql => DEFAULT_MYSQL_PORT,
            DatabaseEngine::Postgres => DEFAULT_POSTGRES_PORT,
        }
    }

    /// Default migrations path for the engine.
    pub fn default_migrations_path(self) -> &'static str {
        match self {
            DatabaseEngine::MongoDb => DEFAULT_MONGO_MIGRATIONS,
            DatabaseEngine::MySql => DEFAULT_MYSQL_MIGRATIONS,
            DatabaseEngine::Postgres => DEFAULT_POSTGRES_MIGRATIONS,
        }
    }

    /// Environment variable prefix for the engine.
    pub fn env_prefix(self) -> &'static str {
        match self {
            DatabaseEngine::MongoDb => "MONGODB",
            DatabaseEngine::MySql => "MYSQL",
            DatabaseEngine::Postgres => "POSTGRES",
        }
    }
}

/// Connection settings for a single database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Database server host.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Connection user.
    pub user: String,
    /// Connection password.
    pub password: String,
    /// Database (schema) name.
    pub database: String,
    /// URI of the schema migration scripts.
    pub migrations_path: String,
}

impl Database {
    /// Connection settings carrying only the engine's built-in defaults.
    pub fn defaults_for(engine: DatabaseEngine) -> Self {
        Self {
            host: String::new(),
            port: engine.default_port(),
            user: String::new(),
            password: String::new(),
            database: String::new(),
            migrations_path: engine.default_migrations_path().to_string(),
        }
    }

    /// Format the engine-specific connection address.
    ///
    /// Credentials are interpolated verbatim; callers must escape values
    /// containing URI-reserved characters themselves.
    pub fn connection_address(&self, engine: DatabaseEngine) -> String {
        match engine {
            DatabaseEngine::MongoDb => format!(
                "mongodb://{}:{}@{}:{}/{}?authSource=admin&ssl=false",
                self.user, self.password, self.host, self.port, self.database
            ),
            DatabaseEngine::MySql => format!(
                "{}:{}@tcp({}:{})/{}",
                self.user, self.password, self.host, self.port, self.database
            ),
            DatabaseEngine::Postgres => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                self.user, self.password, self.host, self.port, self.database
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Database {
        Database {
            host: "h".to_string(),
            port: 1,
            user: "u".to_string(),
            password: "p".to_string(),
            database: "d".to_string(),
            migrations_path: "file://migrations/test".to_string(),
        }
    }

    #[test]
    fn test_engine_default_ports() {
        assert_eq!(DatabaseEngine::MongoDb.default_port(), 27017);
        assert_eq!(DatabaseEngine::MySql.default_port(), 3306);
        assert_eq!(DatabaseEngine::Postgres.default_port(), 5432);
    }

    #[test]
    fn test_engine_default_migrations_paths() {
        assert_eq!(
            DatabaseEngine::MongoDb.default_migrations_path(),
            "file://migrations/mongo"
        );
        assert_eq!(
            DatabaseEngine::MySql.default_migrations_path(),
            "file://migrations/mysql"
        );
        assert_eq!(
            DatabaseEngine::Postgres.default_migrations_path(),
            "file://migrations/postgres"
        );
    }

    #[test]
    fn test_defaults_for_leaves_credentials_empty() {
        for engine in DatabaseEngine::ALL {
            let db = Database::defaults_for(engine);
            assert_eq!(db.host, "");
            assert_eq!(db.user, "");
            assert_eq!(db.password, "");
            assert_eq!(db.database, "");
            assert_eq!(db.port, engine.default_port());
            assert_eq!(db.migrations_path, engine.default_migrations_path());
        }
    }

    #[test]
    fn test_mongodb_connection_address() {
        assert_eq!(
            sample().connection_address(DatabaseEngine::MongoDb),
            "mongodb://u:p@h:1/d?authSource=admin&ssl=false"
        );
    }

    #[test]
    fn test_mysql_connection_address() {
        assert_eq!(
            sample().connection_address(DatabaseEngine::MySql),
            "u:p@tcp(h:1)/d"
        );
    }

    #[test]
    fn test_postgres_connection_address() {
        assert_eq!(
            sample().connection_address(DatabaseEngine::Postgres),
            "postgres://u:p@h:1/d?sslmode=disable"
        );
    }
}
