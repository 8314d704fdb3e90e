use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hour cycle used for the time line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// 12-hour clock with an optional AM/PM tag.
    #[serde(rename = "12")]
    TwelveHour,

    /// 24-hour clock.
    #[default]
    #[serde(rename = "24")]
    TwentyFourHour,
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::TwelveHour => write!(f, "12"),
            TimeFormat::TwentyFourHour => write!(f, "24"),
        }
    }
}

/// Glyph placed between the hour, minute and second groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// `14:05`
    #[default]
    Colon,

    /// `14·05`
    Dot,

    /// `14 05`
    Space,

    /// `1405`
    #[serde(rename = "none")]
    Omitted,
}

impl SeparatorStyle {
    /// The glyph inserted between digit groups.
    pub fn glyph(self) -> &'static str {
        match self {
            SeparatorStyle::Colon => ":",
            SeparatorStyle::Dot => "·",
            SeparatorStyle::Space => " ",
            SeparatorStyle::Omitted => "",
        }
    }
}

impl fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeparatorStyle::Colon => write!(f, "colon"),
            SeparatorStyle::Dot => write!(f, "dot"),
            SeparatorStyle::Space => write!(f, "space"),
            SeparatorStyle::Omitted => write!(f, "none"),
        }
    }
}
