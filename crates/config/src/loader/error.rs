//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Identify the input format on decode failures.
//!
//! Does NOT handle:
//! - Logging or presentation of errors (callers decide).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, formats).
//! - Environment parse errors name the offending variable in their message.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Serialization formats accepted by the file loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Yaml,
    Json,
    Xml,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Toml => "TOML",
            SourceFormat::Yaml => "YAML",
            SourceFormat::Json => "JSON",
            SourceFormat::Xml => "XML",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file is missing or unreadable.
    #[error("failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config content does not conform to the format's grammar or the
    /// expected field types. The message comes from the underlying decoder.
    #[error("failed to decode {format} config: {message}")]
    Decode {
        format: SourceFormat,
        message: String,
    },

    /// An environment variable held a non-integer value.
    #[error("invalid {var} int value: {message}")]
    InvalidInt { var: String, message: String },

    /// An environment variable held a non-boolean value.
    #[error("invalid {var} bool value: {value}")]
    InvalidBool { var: String, value: String },

    /// The file extension is not recognized by `loader::from_path`.
    #[error("unsupported config format for {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The named `.env` file does not exist.
    #[error("env file not found at {path}")]
    DotenvNotFound { path: PathBuf },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("failed to parse .env file at position {error_index}")]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("failed to load .env file")]
    DotenvUnknown,
}
