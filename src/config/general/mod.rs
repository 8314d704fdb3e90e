mod log_level;

pub use log_level::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// General configuration settings for clockface.
///
/// Contains global settings that affect the overall behavior of the program,
/// such as logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneralConfig {
    /// Logging level, used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log line format, used when `CLOCKFACE_LOG_FORMAT` is not set.
    #[serde(default)]
    pub log_format: LogFormat,
}
