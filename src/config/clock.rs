mod date;
mod field;
mod layout;
mod patch;
mod styling;
mod time;

pub use date::DateFormat;
pub use field::ConfigField;
pub use layout::{Alignment, VerticalAlignment};
pub use patch::ClockConfigPatch;
pub use styling::ClockStyle;
pub use time::{SeparatorStyle, TimeFormat};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every user-adjustable display setting of the clock.
///
/// The record is always fully populated. Persisted blobs that lack a field
/// are completed from [`ClockConfig::default`] while deserializing, so a
/// loaded config never has a hole in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockConfig {
    /// Hour cycle of the time line.
    pub time_format: TimeFormat,

    /// Whether the seconds group is appended to the time line.
    pub show_seconds: bool,

    /// Whether the AM/PM tag is shown. Only meaningful for the 12-hour cycle.
    pub show_am_pm: bool,

    /// Glyph placed between digit groups.
    pub separator_style: SeparatorStyle,

    /// Whether the date line is rendered at all.
    pub show_date: bool,

    /// Whether the date line starts with the full weekday name.
    pub show_day: bool,

    /// Layout of the date line.
    pub date_format: DateFormat,

    /// Visual treatment of the time line.
    pub clock_style: ClockStyle,

    /// Time line font size in pixels.
    pub font_size: u32,

    /// Time line font weight (100-900).
    pub font_weight: u32,

    /// Font family used for both lines.
    pub custom_font: String,

    /// Color of the time line.
    pub time_color: String,

    /// Color of the date line.
    pub date_color: String,

    /// Color of the clock pane background.
    pub background_color: String,

    /// Color used by glow, outline, neon and gradient treatments.
    pub accent_color: String,

    /// Whether an accent-colored glow is drawn around the time line.
    pub glow_effect: bool,

    /// Inner glow radius in pixels. The outer radius is twice this value.
    pub glow_intensity: u32,

    /// Whether a fixed drop shadow is drawn under the time line.
    pub shadow_effect: bool,

    /// Whether the pane background is blurred.
    pub blur_background: bool,

    /// Whether style changes are animated.
    pub animate_transition: bool,

    /// Duration of style transitions in milliseconds.
    pub animation_speed: u32,

    /// Horizontal placement inside the pane.
    pub alignment: Alignment,

    /// Vertical placement inside the pane.
    pub vertical_alignment: VerticalAlignment,

    /// Gap between the time and date lines in pixels.
    pub spacing: u32,

    /// Pane opacity in percent (0-100).
    pub opacity: u32,

    /// Corner radius of the pane in pixels.
    pub border_radius: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::TwentyFourHour,
            show_seconds: true,
            show_am_pm: true,
            separator_style: SeparatorStyle::Colon,
            show_date: true,
            show_day: true,
            date_format: DateFormat::Long,
            clock_style: ClockStyle::Bold,
            font_size: 96,
            font_weight: 700,
            custom_font: "system-ui".to_string(),
            time_color: "#ffffff".to_string(),
            date_color: "#888888".to_string(),
            background_color: "#000000".to_string(),
            accent_color: "#00ff00".to_string(),
            glow_effect: true,
            glow_intensity: 20,
            shadow_effect: true,
            blur_background: false,
            animate_transition: true,
            animation_speed: 300,
            alignment: Alignment::Center,
            vertical_alignment: VerticalAlignment::Middle,
            spacing: 16,
            opacity: 100,
            border_radius: 24,
        }
    }
}

impl ClockConfig {
    /// Merges `patch` into this config and returns the fields whose value changed.
    ///
    /// Fields absent from the patch are left untouched.
    pub fn apply(&mut self, patch: ClockConfigPatch) -> Vec<ConfigField> {
        patch.merge_into(self)
    }
}
