use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_json_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::ConfigField,
    config_store::ConfigStore,
};

/// Command for reading values from the config store.
///
/// Without arguments every field is listed, one `key: value` per line.
///
/// # Example Usage
///
/// ```bash
/// clockface config get
/// clockface config get showSeconds
/// clockface config get accentColor
/// ```
pub struct GetCommand;

impl Command for GetCommand {
    /// Retrieves and formats one field, or all of them.
    ///
    /// # Arguments
    ///
    /// * `args` - Optional field key
    ///
    /// # Errors
    ///
    /// * `CliError::ConfigError` - If the field key is unknown
    fn execute(&self, store: &mut ConfigStore, args: &[String]) -> CommandResult {
        if let Some(key) = args.first() {
            let value = store.get_field(key)?;
            return Ok(format!("{key}: {}", format_json_value(&value)));
        }

        let lines = ConfigField::ALL
            .into_iter()
            .map(|field| {
                store
                    .get_field(field.key())
                    .map(|value| format!("{field}: {}", format_json_value(&value)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get configuration value".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "field".to_string(),
                description: "Field key (e.g., showSeconds); omit to list all".to_string(),
                required: false,
                value_type: ArgType::Field,
            }],
            examples: vec![
                "clockface config get".to_string(),
                "clockface config get showSeconds".to_string(),
                "clockface config get accentColor".to_string(),
            ],
        }
    }
}
