//! Terminal rendering of the clock and the interactive display loop.
//!
//! The frame is drawn with 24-bit ANSI colors from the resolved style
//! sheet. Properties a terminal cannot express (font family and size,
//! shadows, blur) only appear in the CSS output of the style resolver.

mod frame;
mod layout;
mod session;

#[cfg(test)]
mod tests;

pub use frame::{REOPEN_HINT, SETTINGS_PANE_WIDTH, TerminalSize, render_frame, visible_width};
pub use layout::PaneLayout;
pub use session::{InputOutcome, RELOAD_DEBOUNCE, RunOptions, Session, run};
