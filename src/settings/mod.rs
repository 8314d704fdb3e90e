//! Settings pane model.
//!
//! Describes the control bound to each config field, which controls are
//! visible for a given config, how raw input becomes a single-field patch
//! and how the pane is laid out. The pane is drawn by [`crate::display`].

mod controls;
mod error;
mod export;
mod panel;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use controls::{CONTROLS, Control, ControlKind, Section, SelectOption};
pub use error::SettingsError;
pub use export::{EXPORT_FILE_NAME, export_config};
pub use panel::{PanelRow, PanelSection, SettingsPanel};
