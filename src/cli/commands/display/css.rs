use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    clock::resolve,
    config_store::ConfigStore,
};

/// Prints the resolved style of the clock as CSS rules.
pub struct CssCommand;

impl Command for CssCommand {
    fn execute(&self, store: &mut ConfigStore, _args: &[String]) -> CommandResult {
        Ok(resolve(store.get()).to_css())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "css".to_string(),
            description: "Print the resolved clock style as CSS".to_string(),
            category: "display".to_string(),
            args: vec![],
            examples: vec!["clockface display css > clock.css".to_string()],
        }
    }
}
