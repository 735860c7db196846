//! GridKit Settings Crate
//!
//! Handles application configuration: the template store endpoint, the
//! persistence debounce window and grid presentation constants.

pub mod config;
pub mod error;

pub use config::{Config, GridSettings, StoreSettings, SyncSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
