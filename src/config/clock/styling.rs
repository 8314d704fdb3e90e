use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named visual treatment of the time line.
///
/// Controls how the text color and shadows are composed. See
/// [`crate::clock::style::resolve`] for the exact rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockStyle {
    /// Plain text in the time color.
    Minimal,

    /// Plain text in the time color, typically paired with a heavy weight.
    #[default]
    Bold,

    /// Transparent glyphs with an accent-colored outline.
    Outlined,

    /// Accent-colored glyphs with a fixed four-layer glow.
    Neon,

    /// Diagonal gradient from the time color to the accent color.
    Gradient,
}

impl fmt::Display for ClockStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockStyle::Minimal => write!(f, "minimal"),
            ClockStyle::Bold => write!(f, "bold"),
            ClockStyle::Outlined => write!(f, "outlined"),
            ClockStyle::Neon => write!(f, "neon"),
            ClockStyle::Gradient => write!(f, "gradient"),
        }
    }
}
