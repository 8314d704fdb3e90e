use serde_json::Value;

use super::SchemaCommand;
use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_command, format_description},
        types::CommandMetadata,
    },
    config::ConfigField,
    config_store::ConfigStore,
    settings::Control,
};

/// Information about one config field, extracted from the JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Persisted key.
    pub name: String,
    /// Schema type, or the referenced definition for enums.
    pub type_name: String,
    /// Doc comment of the field.
    pub description: String,
    /// Default value, or "-" if the schema has none.
    pub default_value: String,
}

/// Extracts field information from the clock config schema, in field order.
///
/// Fields missing from the schema's `properties` are skipped.
pub fn extract_field_info(schema: &Value) -> Vec<FieldInfo> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };

    ConfigField::ALL
        .into_iter()
        .filter_map(|field| {
            let property = properties.get(field.key())?;
            Some(FieldInfo {
                name: field.key().to_string(),
                type_name: get_type(property),
                description: get_description(property),
                default_value: get_default_value(property),
            })
        })
        .collect()
}

fn get_type(property: &Value) -> String {
    if let Some(type_name) = property.get("type").and_then(Value::as_str) {
        return type_name.to_string();
    }

    property
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(|reference| reference.rsplit('/').next())
        .unwrap_or("unknown")
        .to_string()
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("No description provided")
        .to_string()
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|default| match default {
            Value::String(s) => format!("\"{s}\""),
            _ => default.to_string(),
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Lists every field with its type, default and accepted input.
pub struct FieldsCommand;

impl Command for FieldsCommand {
    fn execute(&self, _store: &mut ConfigStore, _args: &[String]) -> CommandResult {
        let schema = SchemaCommand::schema()?;

        let lines: Vec<String> = extract_field_info(&schema)
            .into_iter()
            .map(|info| {
                let input = ConfigField::from_key(&info.name)
                    .and_then(Control::for_field)
                    .map(|control| control.input_hint())
                    .unwrap_or_default();

                format!(
                    "{} ({}, default {}) {}\n    {}",
                    format_command(&info.name),
                    info.type_name,
                    info.default_value,
                    input,
                    format_description(&info.description)
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "fields".to_string(),
            description: "List all fields with type, default and accepted input".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["clockface config fields".to_string()],
        }
    }
}
