use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Horizontal placement of the clock inside its pane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush with the left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "left"),
            Alignment::Center => write!(f, "center"),
            Alignment::Right => write!(f, "right"),
        }
    }
}

/// Vertical placement of the clock inside its pane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top of the pane.
    Top,
    /// Vertically centered.
    #[default]
    Middle,
    /// Bottom of the pane.
    Bottom,
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalAlignment::Top => write!(f, "top"),
            VerticalAlignment::Middle => write!(f, "middle"),
            VerticalAlignment::Bottom => write!(f, "bottom"),
        }
    }
}
