use crate::{ClockfaceError, Result};
use std::{fs, path::Path};

const DEFAULT_CONFIG: &str = r#"# clockface configuration file
#
# Display settings (colors, formats, effects) are edited with
# `clockface config set <field> <value>` or from the settings pane of
# `clockface run`, and live in the state file, not here.

[general]
# error | warn | info | debug | trace
log_level = "info"
# pretty | json
log_format = "pretty"

[storage]
# state_file = "/path/to/clock-state.json"
"#;

/// Creates a default configuration file if it doesn't exist
///
/// # Errors
/// Returns error if the parent directory or the file cannot be created.
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ClockfaceError::io(e, parent))?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| ClockfaceError::io(e, path))?;

    Ok(())
}
