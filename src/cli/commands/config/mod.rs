//! Configuration management commands.
mod export;
mod fields;
mod get;
mod reset;
mod schema;
mod set;

pub use export::ExportCommand;
pub use fields::FieldsCommand;
pub use get::GetCommand;
pub use reset::ResetCommand;
pub use schema::SchemaCommand;
pub use set::SetCommand;

use crate::cli::CommandRegistry;

/// Registers all configuration-related commands with the command registry.
///
/// Registers commands in the "config" category for reading, editing,
/// resetting and exporting the persisted clock config.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand));
    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand));
    registry.register_command(CATEGORY_NAME, Box::new(ExportCommand));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
    registry.register_command(CATEGORY_NAME, Box::new(FieldsCommand));
}
