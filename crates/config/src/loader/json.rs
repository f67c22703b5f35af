//! JSON configuration loading.

use std::path::Path;

use super::error::{ConfigError, SourceFormat};
use super::raw::RawConfig;
use crate::types::Config;

/// Load configuration from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = super::read_file(path)?;
    let config = load_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded JSON config");
    Ok(config)
}

/// Load configuration from JSON content.
///
/// Fields absent from the content take the built-in defaults; `{}`
/// resolves to the full default table. Content must be a JSON document,
/// so unlike TOML and YAML an entirely empty string is a decode error.
pub fn load_str(content: &str) -> Result<Config, ConfigError> {
    let raw: RawConfig = serde_json::from_str(content).map_err(|e| ConfigError::Decode {
        format: SourceFormat::Json,
        message: e.to_string(),
    })?;
    Ok(raw.into_config())
}
