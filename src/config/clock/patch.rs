use serde::{Deserialize, Serialize};

use super::{
    Alignment, ClockConfig, ClockStyle, ConfigField, DateFormat, SeparatorStyle, TimeFormat,
    VerticalAlignment,
};

/// A partial [`ClockConfig`]: only the fields that are `Some` are applied.
///
/// Deserializes from the same camelCase keys as the persisted config, so a
/// single-field patch can be built from `{"fontSize": 120}`. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[allow(missing_docs)]
pub struct ClockConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<TimeFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_seconds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_am_pm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_style: Option<SeparatorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<DateFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_style: Option<ClockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_effect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_intensity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_effect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_transition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

/// Moves every `Some` field of the patch into the config, recording changes.
macro_rules! merge_fields {
    ($patch:ident, $config:ident, $changed:ident; $($field:ident => $variant:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                if $config.$field != value {
                    $changed.push(ConfigField::$variant);
                }
                $config.$field = value;
            }
        )+
    };
}

impl ClockConfigPatch {
    /// Builds a patch that sets a single field from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when `value` is outside the domain
    /// of the field's type.
    pub fn single(field: ConfigField, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut object = serde_json::Map::new();
        object.insert(field.key().to_string(), value);

        serde_json::from_value(serde_json::Value::Object(object))
    }

    /// Returns `true` when the patch sets no field.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(super) fn merge_into(self, config: &mut ClockConfig) -> Vec<ConfigField> {
        let patch = self;
        let mut changed = Vec::new();

        merge_fields!(patch, config, changed;
            time_format => TimeFormat,
            show_seconds => ShowSeconds,
            show_am_pm => ShowAmPm,
            separator_style => SeparatorStyle,
            show_date => ShowDate,
            show_day => ShowDay,
            date_format => DateFormat,
            clock_style => ClockStyle,
            font_size => FontSize,
            font_weight => FontWeight,
            custom_font => CustomFont,
            time_color => TimeColor,
            date_color => DateColor,
            background_color => BackgroundColor,
            accent_color => AccentColor,
            glow_effect => GlowEffect,
            glow_intensity => GlowIntensity,
            shadow_effect => ShadowEffect,
            blur_background => BlurBackground,
            animate_transition => AnimateTransition,
            animation_speed => AnimationSpeed,
            alignment => Alignment,
            vertical_alignment => VerticalAlignment,
            spacing => Spacing,
            opacity => Opacity,
            border_radius => BorderRadius,
        );

        changed
    }
}
