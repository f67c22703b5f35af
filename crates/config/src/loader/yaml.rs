//! YAML configuration loading.

use std::path::Path;

use super::error::{ConfigError, SourceFormat};
use super::raw::RawConfig;
use crate::types::Config;

/// Load configuration from a YAML file.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = super::read_file(path)?;
    let config = load_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded YAML config");
    Ok(config)
}

/// Load configuration from YAML content.
///
/// Fields absent from the content take the built-in defaults; empty
/// content resolves to the full default table.
pub fn load_str(content: &str) -> Result<Config, ConfigError> {
    // An empty YAML document decodes as null, not as an empty mapping.
    let raw: Option<RawConfig> =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Decode {
            format: SourceFormat::Yaml,
            message: e.to_string(),
        })?;
    Ok(raw.unwrap_or_default().into_config())
}
