//! Rendering commands.
mod css;
mod frame;

pub use css::CssCommand;
pub use frame::FrameCommand;

use crate::cli::CommandRegistry;

/// Registers the rendering commands in the "display" category.
pub fn register_commands(registry: &mut CommandRegistry) {
    const CATEGORY_NAME: &str = "display";

    registry.register_command(CATEGORY_NAME, Box::new(FrameCommand));
    registry.register_command(CATEGORY_NAME, Box::new(CssCommand));
}
