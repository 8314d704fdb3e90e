use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::config::{ClockConfig, DateFormat, TimeFormat};

/// The two text lines of the clock for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockText {
    /// The time line. Always present.
    pub time: String,
    /// The date line, `None` when the date is hidden.
    pub date: Option<String>,
}

/// Formats both lines of the clock for a local instant.
pub fn format_clock(instant: NaiveDateTime, config: &ClockConfig) -> ClockText {
    ClockText {
        time: format_time(instant.time(), config),
        date: config
            .show_date
            .then(|| format_date(instant.date(), config)),
    }
}

/// Formats the time line, e.g. `14:05:09` or `02·05 PM`.
pub fn format_time(time: NaiveTime, config: &ClockConfig) -> String {
    let mut hours = time.hour();
    let mut meridiem = "";

    if config.time_format == TimeFormat::TwelveHour {
        meridiem = if hours >= 12 { "PM" } else { "AM" };
        hours %= 12;
        if hours == 0 {
            hours = 12;
        }
    }

    let separator = config.separator_style.glyph();
    let mut text = format!("{hours:02}{separator}{:02}", time.minute());

    if config.show_seconds {
        text.push_str(&format!("{separator}{:02}", time.second()));
    }

    if config.time_format == TimeFormat::TwelveHour && config.show_am_pm {
        text.push(' ');
        text.push_str(meridiem);
    }

    text
}

/// Formats the date line in US English, e.g. `Monday, January 15, 2024`.
pub fn format_date(date: NaiveDate, config: &ClockConfig) -> String {
    let pattern = match config.date_format {
        DateFormat::Long => "%B %-d, %Y",
        DateFormat::Short => "%b %-d",
        DateFormat::Numeric => "%m/%d/%Y",
    };

    let text = date.format(pattern).to_string();

    if config.show_day {
        format!("{}, {text}", date.format("%A"))
    } else {
        text
    }
}
