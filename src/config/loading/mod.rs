mod file_creation;

use super::AppConfig;
use crate::{ClockfaceError, Result};
use file_creation::create_default_config_file;
use std::{fs, path::Path};
use tracing::{debug, instrument};

impl AppConfig {
    /// Loads the program configuration from a TOML file.
    ///
    /// A missing file is created with commented defaults first, so users
    /// have something to edit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default file cannot be created
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    /// - The TOML does not match the configuration schema
    #[instrument]
    pub fn load(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            debug!("Creating default config file at {}", path.display());
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| ClockfaceError::io(e, path))?;
        Self::from_toml(&content, Some(path))
    }

    /// Parses the program configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ClockfaceError::TomlParseError` for malformed TOML and
    /// `ClockfaceError::ConfigValidation` when values have the wrong type.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<AppConfig> {
        let value: toml::Value =
            toml::from_str(content).map_err(|e| ClockfaceError::toml_parse(e, path))?;

        value
            .try_into()
            .map_err(|e| ClockfaceError::ConfigValidation {
                component: "config parsing".to_string(),
                details: format!("Configuration validation failed: {e}"),
            })
    }
}
