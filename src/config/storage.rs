use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of the persisted clock settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Explicit state file. Defaults to `clock-state.json` in the config directory.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}
