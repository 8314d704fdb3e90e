use std::path::PathBuf;

use serde_json::Value;

use crate::config::ConfigField;

/// Represents a change of one clock setting.
///
/// Captures what changed, with the old and new values in their persisted
/// JSON form.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChange {
    /// The field that changed.
    pub field: ConfigField,
    /// The previous value of the field.
    pub old_value: Value,
    /// The new value of the field.
    pub new_value: Value,
}

/// Errors that can occur during clock settings operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The named field does not exist.
    #[error("unknown config field '{0}'")]
    InvalidField(String),

    /// The value is outside the domain of the field's type.
    #[error("invalid value for '{field}': {details}")]
    InvalidValue {
        /// The field that rejected the value.
        field: ConfigField,
        /// Why the value was rejected.
        details: String,
    },

    /// Error occurred while persisting configuration
    #[error("failed to persist config to '{location}': {details}")]
    PersistenceError {
        /// Where persistence failed (file path or "memory")
        location: String,
        /// Error details from the persistence operation
        details: String,
    },

    /// Error occurred while serializing configuration
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized (e.g., "config", "export")
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// Persisted state exists but is not a valid config
    #[error("failed to parse persisted config from {location}: {details}")]
    ParseError {
        /// Location of the persisted state
        location: String,
        /// Parse error details
        details: String,
    },

    /// Failed to initialize file watcher
    #[error("failed to initialize file watcher: {details}")]
    FileWatcherInitError {
        /// File watcher initialization error details
        details: String,
    },

    /// Error occurred while watching a specific file
    #[error("file watcher error for '{path}': {details}")]
    FileWatchError {
        /// Path being watched when error occurred
        path: PathBuf,
        /// File watcher error details
        details: String,
    },

    /// Error occurred during file I/O operations
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },
}

impl ConfigChange {
    /// Creates a new configuration change.
    ///
    /// # Arguments
    ///
    /// * `field` - The field that changed
    /// * `old_value` - The previous value of the field
    /// * `new_value` - The new value of the field
    pub fn new(field: ConfigField, old_value: Value, new_value: Value) -> Self {
        Self {
            field,
            old_value,
            new_value,
        }
    }
}
