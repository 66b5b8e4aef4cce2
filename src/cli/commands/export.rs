//! Export command implementation.
//!
//! The `aihub export` command writes one record as a plain-text file.

use std::path::PathBuf;

use crate::cli::args::ExportArgs;
use crate::error::Result;
use crate::prompts::{ExportOutcome, PromptStore};
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    store: PromptStore,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(store: PromptStore, args: ExportArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ExportCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        let destination = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.txt", self.args.name)));

        match self.store.export_text(&self.args.name, &destination)? {
            ExportOutcome::Exported => {
                println!(
                    "{}",
                    theme.format_success(&format!("Exported to {}", destination.display()))
                );
                Ok(CommandResult::success())
            }
            ExportOutcome::NotFound => {
                eprintln!(
                    "{}",
                    theme.format_warning(&format!("'{}' not found", self.args.name))
                );
                Ok(CommandResult::failure(1))
            }
        }
    }
}
