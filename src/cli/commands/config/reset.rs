use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config_store::ConfigStore,
};

/// Restores every field to its default and persists the result.
pub struct ResetCommand;

impl Command for ResetCommand {
    fn execute(&self, store: &mut ConfigStore, _args: &[String]) -> CommandResult {
        store.reset()?;
        Ok("Reset clock config to defaults".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Reset all settings to their defaults".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["clockface config reset".to_string()],
        }
    }
}
