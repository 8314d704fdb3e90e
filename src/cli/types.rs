use thiserror::Error;

use crate::{config_store::ConfigStore, settings::SettingsError};

/// Errors that can occur during CLI command execution.
///
/// This enum represents all possible error conditions in the CLI system,
/// from command discovery failures to execution errors. Each variant provides
/// contextual information to help users understand what went wrong.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    ///
    /// This occurs when users specify a command that doesn't exist, either
    /// because the category is invalid or the command name is wrong within
    /// a valid category.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments or too many arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the config store.
    ///
    /// This wraps errors such as unknown field keys, values outside a
    /// field's type domain, or failures writing the state file.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A value was rejected by the field's settings control.
    #[error("Invalid setting: {0}")]
    Settings(#[from] SettingsError),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<crate::config_store::ConfigError> for CliError {
    fn from(error: crate::config_store::ConfigError) -> Self {
        CliError::ConfigError(error.to_string())
    }
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either a success message
/// as a String or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Defines the metadata for command arguments, enabling help generation
/// and argument count validation.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "field", "value", "dir").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Provides hints in help text about what kind of value is expected.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A config field key such as `fontSize`.
    Field,

    /// A file system path.
    Path,
}

/// Complete metadata for a CLI command.
///
/// This struct serves as the single source of truth for everything about
/// a command: its identity, arguments, usage examples, and categorization.
/// The CLI system uses this metadata for help generation, argument validation,
/// and command discovery.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "frame").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "config", "display").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands are stateless. The config store they operate on is passed to
/// every call, so the same registry serves the one-shot CLI and the
/// interactive display loop.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The command is responsible for its own argument validation and
    /// business logic. The registry has already checked the argument count
    /// against the command's metadata.
    ///
    /// # Arguments
    ///
    /// * `store` - Config store the command reads or updates
    /// * `args` - Command-line arguments passed by the user
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failures, including:
    /// - Invalid argument values
    /// - Config store errors
    /// - I/O failures
    fn execute(&self, store: &mut ConfigStore, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    ///
    /// This metadata is used by the CLI system for help generation,
    /// argument validation, and command discovery.
    fn metadata(&self) -> CommandMetadata;
}
