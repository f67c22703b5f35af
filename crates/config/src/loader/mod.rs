//! Configuration loading from files, the environment, and dotenv files.
//!
//! Responsibilities:
//! - Per-format file loaders (TOML, YAML, JSON, XML) over a shared raw
//!   decode-then-resolve pipeline.
//! - Extension-based dispatch for callers that hold an arbitrary path.
//! - Environment and `.env` loading.
//!
//! Does NOT handle:
//! - Merging sources; each loader produces a complete `Config` on its own.
//! - Watching files for changes.
//!
//! Invariants / Assumptions:
//! - Every loader resolves omitted fields against the same built-in
//!   default table, so sources are interchangeable.
//! - Errors carry the path or variable they arose from.

pub mod dotenv;
pub mod env;
mod error;
pub mod json;
mod raw;
pub mod toml;
pub mod xml;
pub mod yaml;

#[cfg(test)]
mod tests;

pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, SourceFormat};
pub use xml::XmlConfig;

use std::path::Path;

use crate::types::Config;

/// Load a config file, picking the format from the file extension.
///
/// Recognized extensions are `toml`, `yaml`, `yml`, `json`, and `xml`,
/// case-insensitively. The XML root element name is discarded here; call
/// `xml::load` directly to keep it.
pub fn from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "toml" => toml::load(path),
        "yaml" | "yml" => yaml::load(path),
        "json" => json::load(path),
        "xml" => xml::load(path).map(XmlConfig::into_config),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a config file into memory, mapping failures onto `ConfigError::Io`.
pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
