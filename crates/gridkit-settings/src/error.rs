//! Settings errors.
//!
//! [`ConfigError`] covers values that parse but make no sense for a grid;
//! [`SettingsError`] adds the file system and format failures around it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// The platform has no per-user configuration directory
    #[error("No user configuration directory on this platform")]
    NoConfigDirectory,

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode configuration as TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// A configuration value the grid cannot work with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{0}' must not be empty")]
    Empty(String),

    /// Only `.toml` and `.json` files are understood
    #[error("Unsupported config file extension: {0}")]
    UnsupportedFormat(String),

    #[error("'{key}' must be positive, got {value}")]
    NotPositive { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
