//! Configuration schema definitions.
//!
//! Two documents live here: [`ClockConfig`], the user-facing display settings
//! persisted as JSON and edited through the settings pane, and [`AppConfig`],
//! the TOML file that configures the program itself (logging, storage).

mod clock;
mod general;
mod loading;
mod paths;
mod storage;


pub use clock::{
    Alignment, ClockConfig, ClockConfigPatch, ClockStyle, ConfigField, DateFormat,
    SeparatorStyle, TimeFormat, VerticalAlignment,
};
pub use general::{GeneralConfig, LogFormat, LogLevel};
pub use paths::ConfigPaths;
pub use storage::StorageConfig;

use serde::{Deserialize, Serialize};

/// Program configuration loaded from `config.toml`.
///
/// All sections are optional in the file and fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Where the clock settings are persisted.
    #[serde(default)]
    pub storage: StorageConfig,
}
