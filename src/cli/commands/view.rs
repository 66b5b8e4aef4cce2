//! View command implementation.
//!
//! The `aihub view` command prints one record in the plain-text export
//! layout, so the output is pipe-friendly.

use crate::cli::args::ViewArgs;
use crate::error::Result;
use crate::prompts::PromptStore;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The view command implementation.
pub struct ViewCommand {
    store: PromptStore,
    args: ViewArgs,
}

impl ViewCommand {
    /// Create a new view command.
    pub fn new(store: PromptStore, args: ViewArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ViewCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        match self.store.load(&self.args.name)? {
            Some(record) => {
                print!("{}", record.to_export_text());
                Ok(CommandResult::success())
            }
            None => {
                eprintln!(
                    "{}",
                    theme.format_warning(&format!("'{}' not found", self.args.name))
                );
                Ok(CommandResult::failure(1))
            }
        }
    }
}
