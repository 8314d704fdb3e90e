//! Unit tests for display module

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::{Alignment, ClockConfig, ClockStyle, VerticalAlignment};
use crate::config_store::{ConfigStore, MemoryStorage};
use crate::display::{
    InputOutcome, PaneLayout, REOPEN_HINT, Session, TerminalSize, render_frame, visible_width,
};

fn instant() -> NaiveDateTime {
    NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        NaiveTime::from_hms_opt(14, 5, 9).unwrap(),
    )
}

fn strip_ansi(line: &str) -> String {
    let mut plain = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        plain.push(c);
    }

    plain
}

fn plain_lines(config: &ClockConfig, layout: &PaneLayout, size: TerminalSize) -> Vec<String> {
    render_frame(instant(), config, layout, size)
        .split('\n')
        .map(strip_ansi)
        .collect()
}

fn row_of(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("'{needle}' not rendered"))
}

mod pane_layout {
    use super::*;

    #[test]
    fn starts_with_settings_open() {
        let layout = PaneLayout::default();

        assert!(layout.settings_open());
        assert!(!layout.shows_reopen_control());
    }

    #[test]
    fn dismiss_shows_reopen_control() {
        let mut layout = PaneLayout::default();

        layout.dismiss();
        assert!(!layout.settings_open());
        assert!(layout.shows_reopen_control());

        layout.reopen();
        assert!(layout.settings_open());
        assert!(!layout.shows_reopen_control());
    }

    #[test]
    fn toggle_flips_pane() {
        let mut layout = PaneLayout::default();

        layout.toggle();
        assert!(!layout.settings_open());
        layout.toggle();
        assert!(layout.settings_open());
    }

    #[test]
    fn clock_only_never_opens() {
        let mut layout = PaneLayout::clock_only();

        layout.reopen();
        layout.toggle();

        assert!(!layout.settings_open());
        assert!(!layout.shows_reopen_control());
    }
}

mod frames {
    use super::*;

    #[test]
    fn frame_fills_terminal() {
        let size = TerminalSize {
            columns: 120,
            rows: 30,
        };

        for layout in [
            PaneLayout::default(),
            PaneLayout::clock_only(),
            {
                let mut dismissed = PaneLayout::default();
                dismissed.dismiss();
                dismissed
            },
        ] {
            let frame = render_frame(instant(), &ClockConfig::default(), &layout, size);
            let lines: Vec<&str> = frame.split('\n').collect();

            assert_eq!(lines.len(), 30);
            for line in lines {
                assert_eq!(visible_width(line), 120, "{layout:?}: {line:?}");
            }
        }
    }

    #[test]
    fn centered_by_default() {
        let lines = plain_lines(
            &ClockConfig::default(),
            &PaneLayout::clock_only(),
            TerminalSize::default(),
        );

        let time_row = row_of(&lines, "14:05:09");
        assert_eq!(time_row, 10);
        assert_eq!(lines[time_row], format!("{0}14:05:09{0}", " ".repeat(36)));

        let date_row = row_of(&lines, "Monday, January 15, 2024");
        assert_eq!(date_row, 12);
    }

    #[test]
    fn left_and_right_alignment_keep_padding() {
        let left = ClockConfig {
            alignment: Alignment::Left,
            ..ClockConfig::default()
        };
        let lines = plain_lines(&left, &PaneLayout::clock_only(), TerminalSize::default());
        assert!(lines[row_of(&lines, "14:05:09")].starts_with("  14:05:09 "));

        let right = ClockConfig {
            alignment: Alignment::Right,
            ..ClockConfig::default()
        };
        let lines = plain_lines(&right, &PaneLayout::clock_only(), TerminalSize::default());
        assert!(lines[row_of(&lines, "14:05:09")].ends_with(" 14:05:09  "));
    }

    #[test]
    fn vertical_alignment() {
        let top = ClockConfig {
            vertical_alignment: VerticalAlignment::Top,
            ..ClockConfig::default()
        };
        let lines = plain_lines(&top, &PaneLayout::clock_only(), TerminalSize::default());
        assert_eq!(row_of(&lines, "14:05:09"), 1);

        let bottom = ClockConfig {
            vertical_alignment: VerticalAlignment::Bottom,
            ..ClockConfig::default()
        };
        let lines = plain_lines(&bottom, &PaneLayout::clock_only(), TerminalSize::default());
        assert_eq!(row_of(&lines, "14:05:09"), 20);
        assert_eq!(row_of(&lines, "January"), 22);
    }

    #[test]
    fn hidden_date_is_not_drawn() {
        let config = ClockConfig {
            show_date: false,
            ..ClockConfig::default()
        };

        let text = plain_lines(&config, &PaneLayout::clock_only(), TerminalSize::default()).join("\n");
        assert!(text.contains("14:05:09"));
        assert!(!text.contains("2024"));
    }

    #[test]
    fn dismissed_pane_leaves_reopen_hint() {
        let mut layout = PaneLayout::default();
        layout.dismiss();

        let lines = plain_lines(&ClockConfig::default(), &layout, TerminalSize::default());

        assert!(lines[0].ends_with(&format!("{REOPEN_HINT} ")));
        assert!(!lines.join("\n").contains("Customize Clock"));
    }

    #[test]
    fn open_pane_is_drawn_beside_clock() {
        let lines = plain_lines(
            &ClockConfig::default(),
            &PaneLayout::default(),
            TerminalSize {
                columns: 120,
                rows: 40,
            },
        );

        let title_row = row_of(&lines, "Customize Clock");
        assert_eq!(title_row, 0);
        assert!(lines[0].contains("│"));
        assert!(!lines[0].contains(REOPEN_HINT));
    }

    #[test]
    fn gradient_interpolates_colors() {
        let config = ClockConfig {
            clock_style: ClockStyle::Gradient,
            time_color: "#ffffff".to_string(),
            accent_color: "#00ff00".to_string(),
            ..ClockConfig::default()
        };

        let frame = render_frame(
            instant(),
            &config,
            &PaneLayout::clock_only(),
            TerminalSize::default(),
        );

        assert!(frame.contains("\x1b[38;2;255;255;255m1"));
        assert!(frame.contains("\x1b[38;2;0;255;0m9"));
    }

    #[test]
    fn weight_and_opacity_map_to_attributes() {
        let heavy = render_frame(
            instant(),
            &ClockConfig::default(),
            &PaneLayout::clock_only(),
            TerminalSize::default(),
        );
        assert!(heavy.contains("\x1b[1m"));
        assert!(!heavy.contains("\x1b[2m"));

        let faint = ClockConfig {
            font_weight: 300,
            opacity: 30,
            ..ClockConfig::default()
        };
        let faint = render_frame(
            instant(),
            &faint,
            &PaneLayout::clock_only(),
            TerminalSize::default(),
        );
        assert!(!faint.contains("\x1b[1m"));
        assert!(faint.contains("\x1b[2m"));
    }

    #[test]
    fn oversized_persisted_values_stay_within_frame() {
        let store = ConfigStore::load(MemoryStorage::with_contents(
            r#"{"spacing": 4294967295, "fontSize": 4294967295, "glowIntensity": 4294967295}"#,
        ));
        let mut config = store.get().clone();
        assert_eq!(config.spacing, u32::MAX);

        for vertical_alignment in [
            VerticalAlignment::Top,
            VerticalAlignment::Middle,
            VerticalAlignment::Bottom,
        ] {
            config.vertical_alignment = vertical_alignment;

            for size in [
                TerminalSize::default(),
                TerminalSize {
                    columns: 120,
                    rows: 30,
                },
            ] {
                for layout in [PaneLayout::default(), PaneLayout::clock_only()] {
                    let frame = render_frame(instant(), &config, &layout, size);
                    let lines: Vec<&str> = frame.split('\n').collect();

                    assert_eq!(lines.len(), size.rows);
                    for line in lines {
                        assert_eq!(visible_width(line), size.columns);
                    }
                }
            }
        }
    }

    #[test]
    fn visible_width_ignores_escapes() {
        assert_eq!(visible_width("\x1b[1m\x1b[38;2;1;2;3mab\x1b[0m"), 2);
        assert_eq!(visible_width("14·05"), 5);
        assert_eq!(visible_width(""), 0);
    }
}

mod terminal_size {
    use super::*;

    #[test]
    fn overrides_replace_queried_dimensions() {
        let queried = TerminalSize {
            columns: 132,
            rows: 43,
        };

        assert_eq!(queried.with_overrides(None, None), queried);
        assert_eq!(
            queried.with_overrides(Some("100"), None),
            TerminalSize {
                columns: 100,
                rows: 43,
            }
        );
        assert_eq!(
            queried.with_overrides(None, Some(" 50 ")),
            TerminalSize {
                columns: 132,
                rows: 50,
            }
        );
    }

    #[test]
    fn unusable_overrides_are_ignored() {
        let queried = TerminalSize::default();

        assert_eq!(queried.with_overrides(Some("0"), Some("-3")), queried);
        assert_eq!(queried.with_overrides(Some("wide"), Some("")), queried);
    }

    #[test]
    fn detected_size_is_never_empty() {
        let size = TerminalSize::detect();

        assert!(size.columns > 0);
        assert!(size.rows > 0);
    }
}

mod session {
    use super::*;

    fn session() -> Session {
        Session::new(ConfigStore::with_defaults(), PaneLayout::default())
    }

    #[test]
    fn settings_command_toggles_pane() {
        let mut session = session();

        assert_eq!(session.handle_input("s"), InputOutcome::Continue);
        assert!(session.layout().shows_reopen_control());

        session.handle_input("settings");
        assert!(session.layout().settings_open());
    }

    #[test]
    fn quit_commands() {
        assert_eq!(session().handle_input("q"), InputOutcome::Quit);
        assert_eq!(session().handle_input(" quit "), InputOutcome::Quit);
        assert_eq!(session().handle_input(""), InputOutcome::Continue);
    }

    #[test]
    fn set_updates_store() {
        let mut session = session();

        session.handle_input("set fontSize 120");
        assert_eq!(session.store().get().font_size, 120);
        assert_eq!(session.status(), Some("Set fontSize to 120"));

        session.handle_input("set customFont Fira Code");
        assert_eq!(session.store().get().custom_font, "Fira Code");
    }

    #[test]
    fn rejected_set_keeps_config() {
        let mut session = session();

        session.handle_input("set fontSize 5000");

        assert_eq!(session.store().get(), &ClockConfig::default());
        assert!(session.status().unwrap_or_default().contains("out of range"));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = session();
        session.handle_input("set clockStyle neon");
        assert_eq!(session.store().get().clock_style, ClockStyle::Neon);

        session.handle_input("reset");

        assert_eq!(session.store().get(), &ClockConfig::default());
    }

    #[test]
    fn registry_commands_run_at_prompt() {
        let mut session = session();

        session.handle_input("config get fontSize");
        assert_eq!(session.status(), Some("fontSize: 96"));

        session.handle_input("weather now");
        assert!(session.status().unwrap_or_default().contains("Command not found"));
    }

    #[test]
    fn export_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session();

        session.handle_input(&format!("export {}", dir.path().display()));

        assert!(dir.path().join("clock-config.json").exists());
    }

    #[test]
    fn frame_ends_with_prompt() {
        let mut session = session();
        session.handle_input("config get opacity");

        let frame = session.frame(instant(), TerminalSize::default());
        let lines: Vec<&str> = frame.split('\n').collect();

        assert_eq!(lines.len(), 24);
        assert_eq!(lines[23], "> opacity: 100");
    }
}
