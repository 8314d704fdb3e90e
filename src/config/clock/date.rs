use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Layout of the date line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// Abbreviated month and day, no year (`Jan 15`).
    Short,

    /// Full month name, day and year (`January 15, 2024`).
    #[default]
    Long,

    /// Two-digit month and day with the full year (`01/15/2024`).
    Numeric,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Short => write!(f, "short"),
            DateFormat::Long => write!(f, "long"),
            DateFormat::Numeric => write!(f, "numeric"),
        }
    }
}
