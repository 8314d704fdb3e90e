use crate::config_store::ConfigStore;

use super::{CliError, CommandRegistry};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl Default for CliService {
    fn default() -> Self {
        Self::new()
    }
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// Looks up the command in the specified category and executes it against
    /// `store`. Returns the command output as a string on success.
    ///
    /// # Arguments
    /// * `store` - Config store the command operates on
    /// * `category` - Command category to search in
    /// * `command_name` - Name of the command to execute
    /// * `args` - Command-line arguments to pass to the command
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Returns the command's own error if it fails during execution.
    pub fn execute_command(
        &self,
        store: &mut ConfigStore,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(store, category, command_name, args)
    }

    /// Help text for all commands, or for one category.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the category doesn't exist.
    pub fn help(&self, category: Option<&str>) -> Result<String, CliError> {
        self.registry.help(category)
    }
}
