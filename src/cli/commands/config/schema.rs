use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::ClockConfig,
    config_store::ConfigStore,
};

/// Prints the JSON schema of the persisted clock config.
pub struct SchemaCommand;

impl SchemaCommand {
    /// The schema as a JSON value.
    ///
    /// # Errors
    /// Returns `CliError::ConfigError` if the schema cannot be serialized.
    pub fn schema() -> Result<serde_json::Value, CliError> {
        serde_json::to_value(schema_for!(ClockConfig))
            .map_err(|e| CliError::ConfigError(format!("Failed to serialize schema: {e}")))
    }
}

impl Command for SchemaCommand {
    fn execute(&self, _store: &mut ConfigStore, _args: &[String]) -> CommandResult {
        serde_json::to_string_pretty(&Self::schema()?)
            .map_err(|e| CliError::ConfigError(format!("Failed to serialize schema: {e}")))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of the clock config".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["clockface config schema > clock-config.schema.json".to_string()],
        }
    }
}
