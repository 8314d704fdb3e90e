use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_json_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
    settings::Control,
};

/// Command for changing one field of the persisted config.
///
/// The value is validated by the field's settings control, so the same
/// ranges, steps and options apply as in the settings pane.
pub struct SetCommand;

impl Command for SetCommand {
    fn execute(&self, store: &mut ConfigStore, args: &[String]) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <field> argument for 'set' command".to_string())
        })?;

        let input = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <value> argument for 'set' command".to_string())
        })?;

        let value = Control::for_key(key)?.parse_value(input)?;
        let changes = store.set_field(key, value.clone())?;

        if changes.is_empty() {
            Ok(format!("{key} is already {}", format_json_value(&value)))
        } else {
            Ok(format!("Set {key} to {}", format_json_value(&value)))
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set configuration value".to_string(),
            category: "config".to_string(),
            args: vec![
                CommandArg {
                    name: "field".to_string(),
                    description: "Field key".to_string(),
                    required: true,
                    value_type: ArgType::Field,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value, validated against the field's control".to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "clockface config set clockStyle neon".to_string(),
                "clockface config set fontSize 120".to_string(),
                "clockface config set showSeconds off".to_string(),
            ],
        }
    }
}
