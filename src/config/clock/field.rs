use std::fmt;

/// Identifies one field of [`super::ClockConfig`].
///
/// The key of a field is its name in the persisted JSON blob, which is also
/// the name accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ConfigField {
    TimeFormat,
    ShowSeconds,
    ShowAmPm,
    SeparatorStyle,
    ShowDate,
    ShowDay,
    DateFormat,
    ClockStyle,
    FontSize,
    FontWeight,
    CustomFont,
    TimeColor,
    DateColor,
    BackgroundColor,
    AccentColor,
    GlowEffect,
    GlowIntensity,
    ShadowEffect,
    BlurBackground,
    AnimateTransition,
    AnimationSpeed,
    Alignment,
    VerticalAlignment,
    Spacing,
    Opacity,
    BorderRadius,
}

impl ConfigField {
    /// All fields in declaration order.
    pub const ALL: [ConfigField; 26] = [
        ConfigField::TimeFormat,
        ConfigField::ShowSeconds,
        ConfigField::ShowAmPm,
        ConfigField::SeparatorStyle,
        ConfigField::ShowDate,
        ConfigField::ShowDay,
        ConfigField::DateFormat,
        ConfigField::ClockStyle,
        ConfigField::FontSize,
        ConfigField::FontWeight,
        ConfigField::CustomFont,
        ConfigField::TimeColor,
        ConfigField::DateColor,
        ConfigField::BackgroundColor,
        ConfigField::AccentColor,
        ConfigField::GlowEffect,
        ConfigField::GlowIntensity,
        ConfigField::ShadowEffect,
        ConfigField::BlurBackground,
        ConfigField::AnimateTransition,
        ConfigField::AnimationSpeed,
        ConfigField::Alignment,
        ConfigField::VerticalAlignment,
        ConfigField::Spacing,
        ConfigField::Opacity,
        ConfigField::BorderRadius,
    ];

    /// Persisted key of the field.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::TimeFormat => "timeFormat",
            ConfigField::ShowSeconds => "showSeconds",
            ConfigField::ShowAmPm => "showAmPm",
            ConfigField::SeparatorStyle => "separatorStyle",
            ConfigField::ShowDate => "showDate",
            ConfigField::ShowDay => "showDay",
            ConfigField::DateFormat => "dateFormat",
            ConfigField::ClockStyle => "clockStyle",
            ConfigField::FontSize => "fontSize",
            ConfigField::FontWeight => "fontWeight",
            ConfigField::CustomFont => "customFont",
            ConfigField::TimeColor => "timeColor",
            ConfigField::DateColor => "dateColor",
            ConfigField::BackgroundColor => "backgroundColor",
            ConfigField::AccentColor => "accentColor",
            ConfigField::GlowEffect => "glowEffect",
            ConfigField::GlowIntensity => "glowIntensity",
            ConfigField::ShadowEffect => "shadowEffect",
            ConfigField::BlurBackground => "blurBackground",
            ConfigField::AnimateTransition => "animateTransition",
            ConfigField::AnimationSpeed => "animationSpeed",
            ConfigField::Alignment => "alignment",
            ConfigField::VerticalAlignment => "verticalAlignment",
            ConfigField::Spacing => "spacing",
            ConfigField::Opacity => "opacity",
            ConfigField::BorderRadius => "borderRadius",
        }
    }

    /// Looks a field up by its persisted key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
