use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use super::SettingsError;
use crate::config::ClockConfig;

/// Name of the file written by [`export_config`].
pub const EXPORT_FILE_NAME: &str = "clock-config.json";

/// Writes `config` as pretty-printed JSON to `clock-config.json` in `dir`.
///
/// The file uses the persisted camelCase keys and two-space indentation and
/// is overwritten if present. Nothing else is touched.
///
/// # Errors
/// Returns `SettingsError::ExportFailed` if serialization or the write fails.
pub fn export_config(config: &ClockConfig, dir: &Path) -> Result<PathBuf, SettingsError> {
    let path = dir.join(EXPORT_FILE_NAME);

    let contents =
        serde_json::to_string_pretty(config).map_err(|e| SettingsError::ExportFailed {
            path: path.clone(),
            details: e.to_string(),
        })?;

    fs::write(&path, contents).map_err(|e| SettingsError::ExportFailed {
        path: path.clone(),
        details: e.to_string(),
    })?;

    info!("Exported config to {}", path.display());
    Ok(path)
}
