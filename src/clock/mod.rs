//! Clock computations: text formatting, style resolution and the ticker.
//!
//! Formatting and style resolution are pure functions of the config (and,
//! for text, of the current instant). The ticker drives their
//! recomputation once per second.

/// Hex color parsing and interpolation.
pub mod color;
/// Time and date text for a given instant.
pub mod format;
/// Visual style of the clock resolved from its config.
pub mod style;
/// Once-per-second time source for the display.
pub mod ticker;


pub use color::Rgb;
pub use format::{ClockText, format_clock, format_date, format_time};
pub use style::{ClockStyleSheet, ContainerStyle, TextFill, TextStyle, resolve};
pub use ticker::{LocalClock, Ticker, TimeSource};
