//! Import command implementation.
//!
//! The `aihub import` command imports records from a JSON file. Invalid
//! entries and name collisions are reported but never abort the import;
//! only an unparseable file is a fault.

use crate::cli::args::ImportArgs;
use crate::error::Result;
use crate::prompts::PromptStore;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    store: PromptStore,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(store: PromptStore, args: ImportArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ImportCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        let report = self.store.import(&self.args.file)?;

        println!(
            "{}",
            theme.format_success(&format!(
                "Imported {} record{}",
                report.imported,
                if report.imported == 1 { "" } else { "s" }
            ))
        );
        for message in &report.skipped {
            println!("{}", theme.format_warning(&format!("Skipped: {message}")));
        }
        Ok(CommandResult::success())
    }
}
