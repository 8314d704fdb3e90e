//! Command-line interface for the clock settings.
//!
//! Provides a hierarchical command system for reading and editing the
//! persisted clock config and for printing rendered output. Commands are
//! organized by category and automatically generate help text from metadata.
//! The same registry serves `clockface <category> <command>` and the
//! interactive prompt of the running display.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::config::{
    ExportCommand, FieldsCommand, GetCommand, ResetCommand, SchemaCommand, SetCommand,
};
pub use commands::display::{CssCommand, FrameCommand};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
