//! Configuration management for GridKit
//!
//! Configuration is organized into logical sections:
//! - Store settings (template store endpoint, request timeout)
//! - Sync settings (persistence debounce window)
//! - Grid settings (layout type, row height, margins, widget registry file)
//!
//! Files may be JSON or TOML; missing sections and keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Template store endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Base URL the `/dashboard-templates` paths are appended to
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/chrome-service/v1".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Persistence timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Quiet period before a layout change is written to the store
    pub debounce_ms: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self { debounce_ms: 2500 }
    }
}

impl SyncSettings {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Grid presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Dashboard type requested from the store
    pub layout_type: String,
    /// Row height in pixels
    pub row_height: u32,
    /// Gap between cells in pixels
    pub margin: u32,
    /// Padding inside the grid container in pixels
    pub container_padding: u32,
    /// Optional JSON widget registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            layout_type: "landingPage".to_string(),
            row_height: 56,
            margin: 16,
            container_padding: 0,
            registry_path: None,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreSettings,
    pub sync: SyncSettings,
    pub grid: GridSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/gridkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDirectory)?;
        path.push("gridkit");
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        let write_error = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, content).map_err(write_error)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.base_url.trim().is_empty() {
            return Err(ConfigError::Empty("store.base_url".to_string()));
        }

        if self.store.timeout_ms == 0 {
            return Err(not_positive("store.timeout_ms", self.store.timeout_ms));
        }

        if self.grid.layout_type.trim().is_empty() {
            return Err(ConfigError::Empty("grid.layout_type".to_string()));
        }

        if self.grid.row_height == 0 {
            return Err(not_positive("grid.row_height", self.grid.row_height));
        }

        Ok(())
    }
}

fn not_positive(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::NotPositive {
        key: key.to_string(),
        value: value.to_string(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
