//! Unit tests for CLI module
//!
//! Tests command registry, formatting, and command execution against an
//! in-memory config store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;

use crate::cli::{CliError, CliService, CommandRegistry, formatting::format_json_value};
use crate::config::{ClockConfig, ClockStyle};
use crate::config_store::ConfigStore;

fn run(
    store: &mut ConfigStore,
    category: &str,
    command: &str,
    args: &[&str],
) -> Result<String, CliError> {
    let args: Vec<String> = args.iter().map(|arg| (*arg).to_string()).collect();
    CliService::new().execute_command(store, category, command, &args)
}

#[test]
fn format_json_value_scalars() {
    assert_eq!(format_json_value(&json!("neon")), "\"neon\"");
    assert_eq!(format_json_value(&json!("")), "\"\"");
    assert_eq!(format_json_value(&json!(96)), "96");
    assert_eq!(format_json_value(&json!(-2.5)), "-2.5");
    assert_eq!(format_json_value(&json!(true)), "true");
    assert_eq!(format_json_value(&json!(null)), "null");
}

#[test]
fn format_json_value_collections() {
    assert_eq!(format_json_value(&json!([1, 2, 3])), "[3]");
    assert_eq!(format_json_value(&json!([])), "[0]");
    assert_eq!(format_json_value(&json!({"a": 1, "b": {"c": 2}})), "{2}");
}

#[test]
fn empty_registry_has_no_categories() {
    let registry = CommandRegistry::new();

    assert!(registry.list_commands().is_empty());
}

#[test]
fn all_commands_are_registered() {
    let mut registry = CommandRegistry::new();
    registry.register_all_commands();

    let commands = registry.list_commands();

    assert_eq!(
        commands,
        vec![
            (
                "config".to_string(),
                ["export", "fields", "get", "reset", "schema", "set"]
                    .map(String::from)
                    .to_vec()
            ),
            (
                "display".to_string(),
                ["css", "frame"].map(String::from).to_vec()
            ),
        ]
    );
}

#[test]
fn unknown_category_and_command() {
    let mut store = ConfigStore::with_defaults();

    let err = run(&mut store, "weather", "get", &[]).unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(ref msg) if msg.contains("'weather'")));

    let err = run(&mut store, "config", "delete", &[]).unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(ref msg) if msg.contains("'delete'")));
}

#[test]
fn argument_count_is_validated() {
    let mut store = ConfigStore::with_defaults();

    let err = run(&mut store, "config", "set", &["fontSize"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid arguments: Expected at least 2 arguments, got 1"
    );

    let err = run(&mut store, "config", "get", &["fontSize", "opacity"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid arguments: Expected at most 1 arguments, got 2"
    );
}

#[test]
fn get_one_field() {
    let mut store = ConfigStore::with_defaults();

    assert_eq!(
        run(&mut store, "config", "get", &["clockStyle"]).unwrap(),
        "clockStyle: \"bold\""
    );
    assert_eq!(
        run(&mut store, "config", "get", &["showSeconds"]).unwrap(),
        "showSeconds: true"
    );

    let err = run(&mut store, "config", "get", &["fontsize"]).unwrap_err();
    assert!(matches!(err, CliError::ConfigError(_)));
}

#[test]
fn get_lists_every_field() {
    let mut store = ConfigStore::with_defaults();

    let output = run(&mut store, "config", "get", &[]).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "timeFormat: \"24\"");
    assert!(lines.contains(&"fontSize: 96"));
    assert!(lines.contains(&"borderRadius: 24"));
}

#[test]
fn set_validates_and_persists() {
    let mut store = ConfigStore::with_defaults();

    let output = run(&mut store, "config", "set", &["clockStyle", "Neon"]).unwrap();
    assert_eq!(output, "Set clockStyle to \"neon\"");
    assert_eq!(store.get().clock_style, ClockStyle::Neon);

    let output = run(&mut store, "config", "set", &["clockStyle", "neon"]).unwrap();
    assert_eq!(output, "clockStyle is already \"neon\"");

    let output = run(&mut store, "config", "set", &["showSeconds", "off"]).unwrap();
    assert_eq!(output, "Set showSeconds to false");
    assert!(!store.get().show_seconds);
}

#[test]
fn set_rejects_invalid_values() {
    let mut store = ConfigStore::with_defaults();

    let err = run(&mut store, "config", "set", &["fontSize", "500"]).unwrap_err();
    assert!(matches!(err, CliError::Settings(_)));

    let err = run(&mut store, "config", "set", &["fontWeight", "425"]).unwrap_err();
    assert!(matches!(err, CliError::Settings(_)));

    let err = run(&mut store, "config", "set", &["nope", "1"]).unwrap_err();
    assert!(matches!(err, CliError::Settings(_)));

    assert_eq!(store.get(), &ClockConfig::default());
}

#[test]
fn reset_restores_defaults() {
    let mut store = ConfigStore::with_defaults();
    run(&mut store, "config", "set", &["opacity", "40"]).unwrap();

    let output = run(&mut store, "config", "reset", &[]).unwrap();

    assert_eq!(output, "Reset clock config to defaults");
    assert_eq!(store.get(), &ClockConfig::default());
}

#[test]
fn export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::with_defaults();
    let target = dir.path().to_string_lossy().to_string();

    let output = run(&mut store, "config", "export", &[&target]).unwrap();

    let path = dir.path().join("clock-config.json");
    assert!(output.starts_with("Exported config to "));
    assert!(path.exists());
}

#[test]
fn schema_and_fields_describe_config() {
    let mut store = ConfigStore::with_defaults();

    let schema = run(&mut store, "config", "schema", &[]).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&schema).unwrap();
    assert!(schema["properties"].get("fontSize").is_some());

    let fields = run(&mut store, "config", "fields", &[]).unwrap();
    assert!(fields.contains("fontSize"));
    assert!(fields.contains("24-200"));
}

#[test]
fn css_reflects_config() {
    let mut store = ConfigStore::with_defaults();
    run(&mut store, "config", "set", &["fontSize", "120"]).unwrap();

    let css = run(&mut store, "display", "css", &[]).unwrap();

    assert!(css.contains(".clockface-time"));
    assert!(css.contains("120px"));
}

#[test]
fn frame_rejects_unknown_pane() {
    let mut store = ConfigStore::with_defaults();

    let err = run(&mut store, "display", "frame", &["sidebar"]).unwrap_err();

    assert!(matches!(err, CliError::InvalidArguments(_)));
}

#[test]
fn help_lists_commands() {
    let service = CliService::new();

    let help = service.help(None).unwrap();
    assert!(help.contains("config"));
    assert!(help.contains("frame"));

    let help = service.help(Some("display")).unwrap();
    assert!(help.contains("css"));
    assert!(!help.contains("reset"));

    assert!(service.help(Some("weather")).is_err());
}
