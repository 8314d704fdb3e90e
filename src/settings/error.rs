use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigField;

/// Errors raised while turning settings input into config changes.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No control exists for the given key.
    #[error("no setting named '{0}'")]
    UnknownControl(String),

    /// A select control received a value outside its option list.
    #[error("'{input}' is not an option for {field} (expected one of: {expected})")]
    UnknownOption {
        /// Field of the select control
        field: ConfigField,
        /// Rejected input
        input: String,
        /// Comma-separated accepted values
        expected: String,
    },

    /// A toggle received something that is not a boolean word.
    #[error("'{input}' is not an on/off value for {field}")]
    NotABoolean {
        /// Field of the toggle
        field: ConfigField,
        /// Rejected input
        input: String,
    },

    /// A slider received something that is not a whole number.
    #[error("'{input}' is not a whole number for {field}")]
    NotANumber {
        /// Field of the slider
        field: ConfigField,
        /// Rejected input
        input: String,
    },

    /// A slider value falls outside its range.
    #[error("{value} is out of range for {field} ({min}-{max})")]
    OutOfRange {
        /// Field of the slider
        field: ConfigField,
        /// Rejected value
        value: u32,
        /// Lowest accepted value
        min: u32,
        /// Highest accepted value
        max: u32,
    },

    /// A slider value does not land on a step.
    #[error("{value} is not a multiple of {step} for {field}")]
    OffStep {
        /// Field of the slider
        field: ConfigField,
        /// Rejected value
        value: u32,
        /// Step size of the slider
        step: u32,
    },

    /// A color picker received something that is not a hex color.
    #[error("'{input}' is not a hex color for {field} (expected #rrggbb)")]
    InvalidColor {
        /// Field of the color picker
        field: ConfigField,
        /// Rejected input
        input: String,
    },

    /// A text input received only whitespace.
    #[error("{field} cannot be empty")]
    EmptyText {
        /// Field of the text input
        field: ConfigField,
    },

    /// The parsed value could not be turned into a patch.
    #[error("invalid value for {field}: {details}")]
    InvalidValue {
        /// Target field
        field: ConfigField,
        /// Description of the failure
        details: String,
    },

    /// Writing the export file failed.
    #[error("failed to export config to '{path}': {details}")]
    ExportFailed {
        /// Path of the export file
        path: PathBuf,
        /// Description of the failure
        details: String,
    },
}
