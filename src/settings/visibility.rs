//! Conditional visibility of settings controls.
//!
//! Some controls only matter when another setting enables them, e.g. the
//! glow intensity slider while the glow effect is off. Hidden controls keep
//! their stored values.

use crate::config::{ClockConfig, ConfigField, TimeFormat};

/// The AM/PM toggle is shown for the 12-hour cycle only.
pub fn shows_am_pm_toggle(config: &ClockConfig) -> bool {
    config.time_format == TimeFormat::TwelveHour
}

/// The weekday toggle and date style select are shown while the date is.
pub fn shows_date_details(config: &ClockConfig) -> bool {
    config.show_date
}

/// The glow intensity slider is shown while the glow effect is on.
pub fn shows_glow_intensity(config: &ClockConfig) -> bool {
    config.glow_effect
}

/// The animation speed slider is shown while transitions are animated.
pub fn shows_animation_speed(config: &ClockConfig) -> bool {
    config.animate_transition
}

/// Whether the control for `field` is shown for `config`.
pub fn is_visible(field: ConfigField, config: &ClockConfig) -> bool {
    match field {
        ConfigField::ShowAmPm => shows_am_pm_toggle(config),
        ConfigField::ShowDay | ConfigField::DateFormat => shows_date_details(config),
        ConfigField::GlowIntensity => shows_glow_intensity(config),
        ConfigField::AnimationSpeed => shows_animation_speed(config),
        _ => true,
    }
}
