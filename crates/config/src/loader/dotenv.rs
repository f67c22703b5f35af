//! `.env` file loading.
//!
//! Responsibilities:
//! - Apply a dotenv file to the process environment.
//! - Hand off to the environment loader for parsing and defaults.
//!
//! Invariants:
//! - A missing file is an error; callers that want optional dotenv
//!   handling check for `ConfigError::DotenvNotFound`.
//! - Variables already present in the process environment win over the
//!   file's values.
//! - Errors never echo file contents; a malformed line is reported by
//!   index only.

use std::path::Path;

use super::env;
use super::error::ConfigError;
use crate::types::Config;

/// Load a dotenv file into the process environment, then load
/// configuration from the environment.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|e| map_dotenv_error(path, e))?;
    tracing::debug!(path = %path.display(), "applied dotenv file");
    env::from_env()
}

fn map_dotenv_error(path: &Path, error: dotenvy::Error) -> ConfigError {
    match error {
        dotenvy::Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            ConfigError::DotenvNotFound {
                path: path.to_path_buf(),
            }
        }
        dotenvy::Error::Io(io) => ConfigError::DotenvIo { kind: io.kind() },
        dotenvy::Error::LineParse(_, error_index) => ConfigError::DotenvParse { error_index },
        _ => ConfigError::DotenvUnknown,
    }
}
