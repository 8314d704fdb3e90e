use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    clock::{LocalClock, TimeSource},
    config_store::ConfigStore,
    display::{PaneLayout, TerminalSize, render_frame},
};

/// Prints a single frame of the clock at the current time.
///
/// The frame is sized to the terminal, with `COLUMNS` and `LINES` as
/// overrides. Pass `settings` to draw the settings pane next to the clock.
pub struct FrameCommand;

impl Command for FrameCommand {
    fn execute(&self, store: &mut ConfigStore, args: &[String]) -> CommandResult {
        let layout = match args.first().map(String::as_str) {
            None => PaneLayout::clock_only(),
            Some("settings") => PaneLayout::default(),
            Some(other) => {
                return Err(CliError::InvalidArguments(format!(
                    "Unknown pane '{other}', expected 'settings'"
                )));
            }
        };

        Ok(render_frame(
            LocalClock.now(),
            store.get(),
            &layout,
            TerminalSize::detect(),
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "frame".to_string(),
            description: "Print one rendered frame of the clock".to_string(),
            category: "display".to_string(),
            args: vec![CommandArg {
                name: "pane".to_string(),
                description: "'settings' to include the settings pane".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "clockface display frame".to_string(),
                "COLUMNS=120 clockface display frame settings".to_string(),
            ],
        }
    }
}
