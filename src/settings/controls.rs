use serde_json::Value;

use super::SettingsError;
use crate::{
    clock::Rgb,
    config::{ClockConfig, ClockConfigPatch, ConfigField},
};

/// Group a control is listed under in the settings pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Section {
    TimeFormat,
    DateFormat,
    Style,
    Colors,
    Effects,
    Animation,
    Layout,
    Advanced,
}

impl Section {
    /// Sections in display order.
    pub const ALL: [Section; 8] = [
        Section::TimeFormat,
        Section::DateFormat,
        Section::Style,
        Section::Colors,
        Section::Effects,
        Section::Animation,
        Section::Layout,
        Section::Advanced,
    ];

    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::TimeFormat => "Time Format",
            Section::DateFormat => "Date Format",
            Section::Style => "Style",
            Section::Colors => "Colors",
            Section::Effects => "Effects",
            Section::Animation => "Animation",
            Section::Layout => "Layout",
            Section::Advanced => "Advanced",
        }
    }
}

/// One entry of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Persisted value.
    pub value: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Input widget of a control, with the constraints it enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// One of a fixed list of values.
    Select(&'static [SelectOption]),
    /// On or off.
    Toggle,
    /// A whole number within `min..=max` that lands on `step`.
    Slider {
        /// Lowest value.
        min: u32,
        /// Highest value.
        max: u32,
        /// Distance between two accepted values, counted from `min`.
        step: u32,
    },
    /// A `#rrggbb` color.
    ColorPicker,
    /// Free text.
    TextInput,
}

/// A settings input bound to exactly one config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// Field written by the control.
    pub field: ConfigField,
    /// Label shown next to the value.
    pub label: &'static str,
    /// Section the control belongs to.
    pub section: Section,
    /// Input widget.
    pub kind: ControlKind,
}

const fn control(
    field: ConfigField,
    label: &'static str,
    section: Section,
    kind: ControlKind,
) -> Control {
    Control {
        field,
        label,
        section,
        kind,
    }
}

const fn slider(min: u32, max: u32, step: u32) -> ControlKind {
    ControlKind::Slider { min, max, step }
}

const TIME_FORMATS: &[SelectOption] = &[option("12", "12 Hour"), option("24", "24 Hour")];

const SEPARATORS: &[SelectOption] = &[
    option("colon", "Colon (:)"),
    option("dot", "Dot (·)"),
    option("space", "Space"),
    option("none", "None"),
];

const DATE_FORMATS: &[SelectOption] = &[
    option("long", "Long (January 1, 2024)"),
    option("short", "Short (Jan 1)"),
    option("numeric", "Numeric (01/01/2024)"),
];

const CLOCK_STYLES: &[SelectOption] = &[
    option("minimal", "Minimal"),
    option("bold", "Bold"),
    option("outlined", "Outlined"),
    option("neon", "Neon"),
    option("gradient", "Gradient"),
];

const ALIGNMENTS: &[SelectOption] = &[
    option("left", "Left"),
    option("center", "Center"),
    option("right", "Right"),
];

const VERTICAL_ALIGNMENTS: &[SelectOption] = &[
    option("top", "Top"),
    option("middle", "Middle"),
    option("bottom", "Bottom"),
];

/// Every control of the settings pane, in display order.
#[rustfmt::skip]
pub static CONTROLS: [Control; 26] = [
    control(ConfigField::TimeFormat, "Format", Section::TimeFormat, ControlKind::Select(TIME_FORMATS)),
    control(ConfigField::ShowSeconds, "Show Seconds", Section::TimeFormat, ControlKind::Toggle),
    control(ConfigField::ShowAmPm, "Show AM/PM", Section::TimeFormat, ControlKind::Toggle),
    control(ConfigField::SeparatorStyle, "Separator Style", Section::TimeFormat, ControlKind::Select(SEPARATORS)),
    control(ConfigField::ShowDate, "Show Date", Section::DateFormat, ControlKind::Toggle),
    control(ConfigField::ShowDay, "Show Day", Section::DateFormat, ControlKind::Toggle),
    control(ConfigField::DateFormat, "Date Style", Section::DateFormat, ControlKind::Select(DATE_FORMATS)),
    control(ConfigField::ClockStyle, "Clock Style", Section::Style, ControlKind::Select(CLOCK_STYLES)),
    control(ConfigField::FontSize, "Font Size", Section::Style, slider(24, 200, 1)),
    control(ConfigField::FontWeight, "Font Weight", Section::Style, slider(100, 900, 100)),
    control(ConfigField::TimeColor, "Time Color", Section::Colors, ControlKind::ColorPicker),
    control(ConfigField::DateColor, "Date Color", Section::Colors, ControlKind::ColorPicker),
    control(ConfigField::BackgroundColor, "Background Color", Section::Colors, ControlKind::ColorPicker),
    control(ConfigField::AccentColor, "Accent Color", Section::Colors, ControlKind::ColorPicker),
    control(ConfigField::GlowEffect, "Glow Effect", Section::Effects, ControlKind::Toggle),
    control(ConfigField::GlowIntensity, "Glow Intensity", Section::Effects, slider(5, 50, 1)),
    control(ConfigField::ShadowEffect, "Shadow Effect", Section::Effects, ControlKind::Toggle),
    control(ConfigField::BlurBackground, "Blur Background", Section::Effects, ControlKind::Toggle),
    control(ConfigField::AnimateTransition, "Animate Transitions", Section::Animation, ControlKind::Toggle),
    control(ConfigField::AnimationSpeed, "Animation Speed (ms)", Section::Animation, slider(100, 1000, 50)),
    control(ConfigField::Alignment, "Horizontal Alignment", Section::Layout, ControlKind::Select(ALIGNMENTS)),
    control(ConfigField::VerticalAlignment, "Vertical Alignment", Section::Layout, ControlKind::Select(VERTICAL_ALIGNMENTS)),
    control(ConfigField::Spacing, "Spacing", Section::Layout, slider(0, 50, 1)),
    control(ConfigField::Opacity, "Opacity", Section::Layout, slider(10, 100, 1)),
    control(ConfigField::CustomFont, "Custom Font", Section::Advanced, ControlKind::TextInput),
    control(ConfigField::BorderRadius, "Border Radius", Section::Advanced, slider(0, 64, 1)),
];

const TRUE_WORDS: [&str; 4] = ["true", "on", "yes", "1"];
const FALSE_WORDS: [&str; 4] = ["false", "off", "no", "0"];

impl Control {
    /// The control bound to `field`.
    pub fn for_field(field: ConfigField) -> Option<&'static Control> {
        CONTROLS.iter().find(|control| control.field == field)
    }

    /// The control bound to the field with persisted key `key`.
    ///
    /// # Errors
    /// Returns `SettingsError::UnknownControl` when no field has that key.
    pub fn for_key(key: &str) -> Result<&'static Control, SettingsError> {
        ConfigField::from_key(key)
            .and_then(Self::for_field)
            .ok_or_else(|| SettingsError::UnknownControl(key.to_string()))
    }

    /// Parses user input into a patch that sets only this control's field.
    ///
    /// # Errors
    /// Returns the `SettingsError` variant describing why the input was rejected.
    pub fn parse_input(&self, input: &str) -> Result<ClockConfigPatch, SettingsError> {
        let value = self.parse_value(input)?;

        ClockConfigPatch::single(self.field, value).map_err(|e| SettingsError::InvalidValue {
            field: self.field,
            details: e.to_string(),
        })
    }

    /// Validates user input and returns the field's new persisted value.
    ///
    /// Sliders enforce their range and step, selects their option list and
    /// color pickers the hex notation. Toggles accept `true/false`, `on/off`,
    /// `yes/no` and `1/0`.
    ///
    /// # Errors
    /// Returns the `SettingsError` variant describing why the input was rejected.
    pub fn parse_value(&self, input: &str) -> Result<Value, SettingsError> {
        let input = input.trim();
        let field = self.field;

        let value = match self.kind {
            ControlKind::Select(options) => {
                let selected = options
                    .iter()
                    .find(|option| option.value.eq_ignore_ascii_case(input))
                    .ok_or_else(|| SettingsError::UnknownOption {
                        field,
                        input: input.to_string(),
                        expected: options
                            .iter()
                            .map(|option| option.value)
                            .collect::<Vec<_>>()
                            .join(", "),
                    })?;

                Value::from(selected.value)
            }
            ControlKind::Toggle => Value::Bool(parse_toggle(input).ok_or_else(|| {
                SettingsError::NotABoolean {
                    field,
                    input: input.to_string(),
                }
            })?),
            ControlKind::Slider { min, max, step } => {
                let value: u32 = input.parse().map_err(|_| SettingsError::NotANumber {
                    field,
                    input: input.to_string(),
                })?;

                if !(min..=max).contains(&value) {
                    return Err(SettingsError::OutOfRange {
                        field,
                        value,
                        min,
                        max,
                    });
                }

                if step > 1 && (value - min) % step != 0 {
                    return Err(SettingsError::OffStep { field, value, step });
                }

                Value::from(value)
            }
            ControlKind::ColorPicker => {
                let color = Rgb::from_hex(input).ok_or_else(|| SettingsError::InvalidColor {
                    field,
                    input: input.to_string(),
                })?;

                Value::from(color.to_string())
            }
            ControlKind::TextInput => {
                if input.is_empty() {
                    return Err(SettingsError::EmptyText { field });
                }

                Value::from(input)
            }
        };

        Ok(value)
    }

    /// The field's current value as shown in the pane.
    ///
    /// Select controls show the option label, toggles show `on`/`off`.
    pub fn display_value(&self, config: &ClockConfig) -> String {
        let value = serde_json::to_value(config)
            .ok()
            .and_then(|json| json.get(self.field.key()).cloned())
            .unwrap_or(Value::Null);

        match (self.kind, &value) {
            (ControlKind::Select(options), Value::String(current)) => options
                .iter()
                .find(|option| *current == option.value)
                .map_or_else(|| current.clone(), |option| option.label.to_string()),
            (ControlKind::Toggle, Value::Bool(true)) => "on".to_string(),
            (ControlKind::Toggle, Value::Bool(false)) => "off".to_string(),
            (_, Value::String(text)) => text.clone(),
            _ => value.to_string(),
        }
    }

    /// Short hint describing accepted input, e.g. `24-200` or `on|off`.
    pub fn input_hint(&self) -> String {
        match self.kind {
            ControlKind::Select(options) => options
                .iter()
                .map(|option| option.value)
                .collect::<Vec<_>>()
                .join("|"),
            ControlKind::Toggle => "on|off".to_string(),
            ControlKind::Slider { min, max, step: 1 } => format!("{min}-{max}"),
            ControlKind::Slider { min, max, step } => format!("{min}-{max} step {step}"),
            ControlKind::ColorPicker => "#rrggbb".to_string(),
            ControlKind::TextInput => "text".to_string(),
        }
    }
}

fn parse_toggle(input: &str) -> Option<bool> {
    let word = input.to_ascii_lowercase();

    if TRUE_WORDS.contains(&word.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&word.as_str()) {
        Some(false)
    } else {
        None
    }
}
