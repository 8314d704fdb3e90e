use std::{env, path::PathBuf};

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
    settings::export_config,
};

/// Writes the current config to `clock-config.json`.
///
/// The file lands in the given directory, or the working directory when
/// none is given.
pub struct ExportCommand;

impl Command for ExportCommand {
    fn execute(&self, store: &mut ConfigStore, args: &[String]) -> CommandResult {
        let dir = match args.first() {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };

        let path = export_config(store.get(), &dir)?;
        Ok(format!("Exported config to {}", path.display()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "export".to_string(),
            description: "Export config as clock-config.json".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "dir".to_string(),
                description: "Target directory (defaults to the working directory)".to_string(),
                required: false,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "clockface config export".to_string(),
                "clockface config export ~/Downloads".to_string(),
            ],
        }
    }
}
