//! Unit tests for config_store module
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;

use crate::config::{ClockConfig, ClockConfigPatch, ClockStyle, ConfigField, SeparatorStyle};
use crate::config_store::{ConfigChange, ConfigError, ConfigStore, MemoryStorage, StateStorage};

fn persisted_config(store: &ConfigStore) -> ClockConfig {
    let contents = store.persisted_contents().unwrap().unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn fully_customized() -> ClockConfig {
    ClockConfig {
        time_format: crate::config::TimeFormat::TwelveHour,
        show_seconds: false,
        separator_style: SeparatorStyle::Dot,
        clock_style: ClockStyle::Gradient,
        font_size: 140,
        custom_font: "JetBrains Mono".to_string(),
        accent_color: "#ff00aa".to_string(),
        glow_effect: false,
        opacity: 55,
        ..ClockConfig::default()
    }
}

#[test]
fn update_changes_exactly_the_named_field() {
    let mut store = ConfigStore::with_defaults();
    let before = serde_json::to_value(store.get()).unwrap();

    let patch = ClockConfigPatch {
        font_size: Some(150),
        ..Default::default()
    };
    let changes = store.update(patch).unwrap();

    let after = serde_json::to_value(store.get()).unwrap();
    for field in ConfigField::ALL {
        if field == ConfigField::FontSize {
            assert_eq!(after[field.key()], json!(150));
        } else {
            assert_eq!(after[field.key()], before[field.key()], "{field} changed");
        }
    }

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].field, ConfigField::FontSize);
    assert_eq!(changes[0].old_value, json!(96));
    assert_eq!(changes[0].new_value, json!(150));
}

#[test]
fn update_every_field_in_isolation() {
    let target = fully_customized();
    let target_json = serde_json::to_value(&target).unwrap();

    for field in ConfigField::ALL {
        let mut store = ConfigStore::with_defaults();
        let before = serde_json::to_value(store.get()).unwrap();

        let value = target_json[field.key()].clone();
        store.set_field(field.key(), value.clone()).unwrap();

        let after = serde_json::to_value(store.get()).unwrap();
        for other in ConfigField::ALL {
            let expected = if other == field {
                &value
            } else {
                &before[other.key()]
            };
            assert_eq!(&after[other.key()], expected, "setting {field} touched {other}");
        }
    }
}

#[test]
fn update_with_equal_value_reports_no_change() {
    let mut store = ConfigStore::with_defaults();

    let changes = store
        .update(ClockConfigPatch {
            show_seconds: Some(true),
            ..Default::default()
        })
        .unwrap();

    assert!(changes.is_empty());
    assert!(store.persisted_contents().unwrap().is_some());
}

#[test]
fn update_persists_after_every_change() {
    let mut store = ConfigStore::with_defaults();
    assert!(store.persisted_contents().unwrap().is_none());

    store
        .update(ClockConfigPatch {
            clock_style: Some(ClockStyle::Neon),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(persisted_config(&store).clock_style, ClockStyle::Neon);
}

#[test]
fn reset_restores_defaults_from_any_state() {
    let storage = MemoryStorage::with_contents(serde_json::to_string(&fully_customized()).unwrap());
    let mut store = ConfigStore::load(storage);
    assert_eq!(store.get(), &fully_customized());

    store.reset().unwrap();

    assert_eq!(store.get(), &ClockConfig::default());
    assert_eq!(persisted_config(&store), ClockConfig::default());
}

#[test]
fn save_then_load_round_trips() {
    let original = fully_customized();
    let mut writer = MemoryStorage::new();
    writer
        .write(&serde_json::to_string(&original).unwrap())
        .unwrap();

    let store = ConfigStore::load(writer.clone());
    assert_eq!(store.get(), &original);

    let reloaded = ConfigStore::load(MemoryStorage::with_contents(
        store.persisted_contents().unwrap().unwrap_or_default(),
    ));
    assert_eq!(reloaded.get(), &original);
}

#[test]
fn malformed_persisted_data_yields_defaults() {
    for contents in ["{not json", "", "null", "[1,2,3]", "\"clock\""] {
        let store = ConfigStore::load(MemoryStorage::with_contents(contents));
        assert_eq!(store.get(), &ClockConfig::default(), "input {contents:?}");
    }
}

#[test]
fn wrongly_typed_field_falls_back_alone() {
    let store = ConfigStore::load(MemoryStorage::with_contents(
        r#"{"fontSize": "huge", "showSeconds": false, "opacity": -5, "clockStyle": "retro"}"#,
    ));

    assert_eq!(
        store.get(),
        &ClockConfig {
            show_seconds: false,
            ..ClockConfig::default()
        }
    );
}

#[test]
fn missing_fields_are_completed_from_defaults() {
    let store = ConfigStore::load(MemoryStorage::with_contents(
        r##"{"timeColor": "#123456", "showSeconds": false}"##,
    ));

    let expected = ClockConfig {
        time_color: "#123456".to_string(),
        show_seconds: false,
        ..ClockConfig::default()
    };
    assert_eq!(store.get(), &expected);
}

#[test]
fn out_of_range_values_are_accepted_on_load() {
    let store = ConfigStore::load(MemoryStorage::with_contents(r#"{"fontSize": 5000}"#));

    assert_eq!(store.get().font_size, 5000);
}

#[test]
fn reload_without_external_changes_is_noop() {
    let mut store = ConfigStore::with_defaults();
    assert!(!store.reload());

    store.update(ClockConfigPatch::default()).unwrap();
    assert!(!store.reload());
}

#[test]
fn get_field_by_key() {
    let store = ConfigStore::with_defaults();

    assert_eq!(store.get_field("separatorStyle").unwrap(), json!("colon"));
    assert_eq!(store.get_field("timeFormat").unwrap(), json!("24"));
    assert_eq!(store.get_field("opacity").unwrap(), json!(100));
    assert!(matches!(
        store.get_field("font_size"),
        Err(ConfigError::InvalidField(_))
    ));
}

#[test]
fn set_field_rejects_values_outside_type_domain() {
    let mut store = ConfigStore::with_defaults();

    let result = store.set_field("clockStyle", json!("sparkly"));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            field: ConfigField::ClockStyle,
            ..
        })
    ));

    let result = store.set_field("fontSize", json!(-4));
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

    assert_eq!(store.get(), &ClockConfig::default());
}

#[test]
fn set_field_accepts_wire_names() {
    let mut store = ConfigStore::with_defaults();

    store.set_field("separatorStyle", json!("none")).unwrap();
    store.set_field("timeFormat", json!("12")).unwrap();

    assert_eq!(store.get().separator_style, SeparatorStyle::Omitted);
    assert_eq!(
        store.get().time_format,
        crate::config::TimeFormat::TwelveHour
    );
}

#[test]
fn set_field_reports_change_in_wire_form() {
    let mut store = ConfigStore::with_defaults();

    let changes = store.set_field("spacing", json!(24)).unwrap();

    assert_eq!(
        changes,
        vec![ConfigChange::new(ConfigField::Spacing, json!(16), json!(24))]
    );
}

#[test]
fn config_error_messages() {
    let error = ConfigError::InvalidField("fontsize".to_string());
    assert_eq!(error.to_string(), "unknown config field 'fontsize'");

    let error = ConfigError::InvalidValue {
        field: ConfigField::Opacity,
        details: "expected u32".to_string(),
    };
    assert_eq!(error.to_string(), "invalid value for 'opacity': expected u32");

    let error = ConfigError::PersistenceError {
        location: "memory".to_string(),
        details: "full".to_string(),
    };
    assert!(matches!(error, ConfigError::PersistenceError { .. }));
}

#[test]
fn storage_location_is_reported() {
    let store = ConfigStore::with_defaults();
    assert_eq!(store.storage_location(), "memory");
}
