//! Unit tests for settings module

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use crate::config::{
    ClockConfig, ClockConfigPatch, ClockStyle, ConfigField, SeparatorStyle, TimeFormat,
};
use crate::settings::{
    CONTROLS, Control, ControlKind, EXPORT_FILE_NAME, Section, SettingsError, SettingsPanel,
    export_config, visibility,
};

fn control(field: ConfigField) -> &'static Control {
    Control::for_field(field).unwrap()
}

mod catalog {
    use super::*;

    #[test]
    fn every_field_has_exactly_one_control() {
        for field in ConfigField::ALL {
            let count = CONTROLS.iter().filter(|c| c.field == field).count();
            assert_eq!(count, 1, "{field}");
        }
    }

    #[test]
    fn sliders_match_documented_ranges() {
        let expected = [
            (ConfigField::FontSize, 24, 200, 1),
            (ConfigField::FontWeight, 100, 900, 100),
            (ConfigField::GlowIntensity, 5, 50, 1),
            (ConfigField::AnimationSpeed, 100, 1000, 50),
            (ConfigField::Spacing, 0, 50, 1),
            (ConfigField::Opacity, 10, 100, 1),
            (ConfigField::BorderRadius, 0, 64, 1),
        ];

        for (field, min, max, step) in expected {
            assert_eq!(
                control(field).kind,
                ControlKind::Slider { min, max, step },
                "{field}"
            );
        }
    }

    #[test]
    fn select_options_cover_wire_values() {
        let ControlKind::Select(options) = control(ConfigField::SeparatorStyle).kind else {
            panic!("separator style is not a select");
        };

        let values: Vec<&str> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, ["colon", "dot", "space", "none"]);
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(
            Control::for_key("glowIntensity").unwrap().label,
            "Glow Intensity"
        );
        assert!(matches!(
            Control::for_key("glow"),
            Err(SettingsError::UnknownControl(_))
        ));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn select_produces_single_field_patch() {
        let patch = control(ConfigField::ClockStyle)
            .parse_input("neon")
            .unwrap();

        assert_eq!(
            patch,
            ClockConfigPatch {
                clock_style: Some(ClockStyle::Neon),
                ..Default::default()
            }
        );
    }

    #[test]
    fn select_accepts_wire_names_case_insensitively() {
        let patch = control(ConfigField::SeparatorStyle)
            .parse_input(" None ")
            .unwrap();
        assert_eq!(patch.separator_style, Some(SeparatorStyle::Omitted));

        let patch = control(ConfigField::TimeFormat).parse_input("12").unwrap();
        assert_eq!(patch.time_format, Some(TimeFormat::TwelveHour));
    }

    #[test]
    fn select_rejects_unknown_option() {
        let error = control(ConfigField::DateFormat)
            .parse_input("iso")
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "'iso' is not an option for dateFormat (expected one of: long, short, numeric)"
        );
    }

    #[test]
    fn toggle_words() {
        let toggle = control(ConfigField::ShowSeconds);

        for word in ["true", "on", "YES", "1"] {
            assert_eq!(toggle.parse_input(word).unwrap().show_seconds, Some(true));
        }
        for word in ["false", "Off", "no", "0"] {
            assert_eq!(toggle.parse_input(word).unwrap().show_seconds, Some(false));
        }

        assert!(matches!(
            toggle.parse_input("maybe"),
            Err(SettingsError::NotABoolean { .. })
        ));
    }

    #[test]
    fn slider_enforces_range() {
        let font_size = control(ConfigField::FontSize);

        assert_eq!(font_size.parse_input("24").unwrap().font_size, Some(24));
        assert_eq!(font_size.parse_input("200").unwrap().font_size, Some(200));
        assert!(matches!(
            font_size.parse_input("201"),
            Err(SettingsError::OutOfRange {
                min: 24,
                max: 200,
                ..
            })
        ));
        assert!(matches!(
            font_size.parse_input("-3"),
            Err(SettingsError::NotANumber { .. })
        ));
        assert!(matches!(
            font_size.parse_input("big"),
            Err(SettingsError::NotANumber { .. })
        ));
    }

    #[test]
    fn slider_enforces_step() {
        let speed = control(ConfigField::AnimationSpeed);

        assert_eq!(
            speed.parse_input("450").unwrap().animation_speed,
            Some(450)
        );
        assert!(matches!(
            speed.parse_input("425"),
            Err(SettingsError::OffStep { step: 50, .. })
        ));

        let weight = control(ConfigField::FontWeight);
        assert!(matches!(
            weight.parse_input("750"),
            Err(SettingsError::OffStep { step: 100, .. })
        ));
    }

    #[test]
    fn color_picker_normalizes_hex() {
        let accent = control(ConfigField::AccentColor);

        assert_eq!(
            accent.parse_input("#FF0080").unwrap().accent_color.as_deref(),
            Some("#ff0080")
        );
        assert_eq!(
            accent.parse_input("#0f8").unwrap().accent_color.as_deref(),
            Some("#00ff88")
        );
        assert!(matches!(
            accent.parse_input("green"),
            Err(SettingsError::InvalidColor { .. })
        ));
    }

    #[test]
    fn text_input_keeps_text() {
        let font = control(ConfigField::CustomFont);

        assert_eq!(
            font.parse_input("  Arial, Helvetica ")
                .unwrap()
                .custom_font
                .as_deref(),
            Some("Arial, Helvetica")
        );
        assert!(matches!(
            font.parse_input("   "),
            Err(SettingsError::EmptyText { .. })
        ));
    }

    #[test]
    fn parsed_patch_changes_only_its_field() {
        let mut config = ClockConfig::default();
        let patch = control(ConfigField::Opacity).parse_input("40").unwrap();

        let changed = config.apply(patch);

        assert_eq!(changed, vec![ConfigField::Opacity]);
        assert_eq!(
            config,
            ClockConfig {
                opacity: 40,
                ..ClockConfig::default()
            }
        );
    }

    #[test]
    fn display_values() {
        let config = ClockConfig::default();

        assert_eq!(control(ConfigField::TimeFormat).display_value(&config), "24 Hour");
        assert_eq!(control(ConfigField::ShowSeconds).display_value(&config), "on");
        assert_eq!(control(ConfigField::BlurBackground).display_value(&config), "off");
        assert_eq!(control(ConfigField::FontSize).display_value(&config), "96");
        assert_eq!(control(ConfigField::TimeColor).display_value(&config), "#ffffff");
        assert_eq!(control(ConfigField::CustomFont).display_value(&config), "system-ui");
    }
}

mod conditional_controls {
    use super::*;

    #[test]
    fn am_pm_toggle_follows_hour_cycle() {
        let mut config = ClockConfig::default();
        assert!(!visibility::shows_am_pm_toggle(&config));

        config.time_format = TimeFormat::TwelveHour;
        assert!(visibility::shows_am_pm_toggle(&config));
    }

    #[test]
    fn date_details_follow_show_date() {
        let config = ClockConfig {
            show_date: false,
            ..ClockConfig::default()
        };

        assert!(!visibility::is_visible(ConfigField::ShowDay, &config));
        assert!(!visibility::is_visible(ConfigField::DateFormat, &config));
        assert!(visibility::is_visible(ConfigField::ShowDate, &config));
    }

    #[test]
    fn sliders_follow_their_toggles() {
        let config = ClockConfig {
            glow_effect: false,
            animate_transition: false,
            ..ClockConfig::default()
        };

        assert!(!visibility::shows_glow_intensity(&config));
        assert!(!visibility::shows_animation_speed(&config));
        assert!(visibility::shows_glow_intensity(&ClockConfig::default()));
        assert!(visibility::shows_animation_speed(&ClockConfig::default()));
    }

    #[test]
    fn panel_hides_dependent_controls() {
        let panel = SettingsPanel::new(&ClockConfig::default());
        let visible = panel.visible_fields();

        assert_eq!(visible.len(), 25);
        assert!(!visible.contains(&ConfigField::ShowAmPm));

        let config = ClockConfig {
            time_format: TimeFormat::TwelveHour,
            show_date: false,
            glow_effect: false,
            ..ClockConfig::default()
        };
        let visible = SettingsPanel::new(&config).visible_fields();

        assert!(visible.contains(&ConfigField::ShowAmPm));
        assert!(!visible.contains(&ConfigField::ShowDay));
        assert!(!visible.contains(&ConfigField::DateFormat));
        assert!(!visible.contains(&ConfigField::GlowIntensity));
        assert_eq!(visible.len(), 23);
    }

    #[test]
    fn panel_keeps_section_order() {
        let panel = SettingsPanel::new(&ClockConfig::default());
        let sections: Vec<Section> = panel.sections().iter().map(|s| s.section).collect();

        assert_eq!(sections, Section::ALL);
    }

    #[test]
    fn rendered_panel_lists_sections_and_actions() {
        let lines = SettingsPanel::new(&ClockConfig::default()).render();
        let text = lines.join("\n");

        assert!(text.contains("Customize Clock"));
        assert!(text.contains("TIME FORMAT"));
        assert!(text.contains("ADVANCED"));
        assert!(text.contains("Font Size"));
        assert!(text.contains("Reset to Default"));
        assert!(text.contains("Export Config"));
        assert!(!text.contains("Show AM/PM"));
    }
}

mod exporting {
    use super::*;

    #[test]
    fn writes_pretty_json_named_clock_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClockConfig {
            clock_style: ClockStyle::Gradient,
            font_size: 120,
            ..ClockConfig::default()
        };

        let path = export_config(&config, dir.path()).unwrap();

        assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("{\n  \"timeFormat\": \"24\",\n"));
        assert!(contents.contains("\n  \"clockStyle\": \"gradient\",\n"));

        let exported: ClockConfig = serde_json::from_str(&contents).unwrap();
        assert_eq!(exported, config);
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = export_config(&ClockConfig::default(), &missing);

        assert!(matches!(result, Err(SettingsError::ExportFailed { .. })));
    }
}
