//! Interactive record creation.
//!
//! The `aihub add` command walks through the record fields with dialoguer
//! prompts and saves the result. An existing name is never overwritten
//! without an explicit confirmation.

use dialoguer::{Confirm, Input};

use crate::error::Result;
use crate::prompts::{PromptRecord, PromptStore, SaveOutcome};
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};
use super::map_dialoguer_err;

/// The add command implementation.
pub struct AddCommand {
    store: PromptStore,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }
}

impl Command for AddCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        if !console::Term::stdout().is_term() {
            eprintln!("aihub add is interactive; pipe records through 'aihub import' instead");
            return Ok(CommandResult::failure(2));
        }

        let name: String = Input::new()
            .with_prompt("Name")
            .interact_text()
            .map_err(map_dialoguer_err)?;
        let positive: String = Input::new()
            .with_prompt("Positive prompt")
            .interact_text()
            .map_err(map_dialoguer_err)?;
        let negative: String = Input::new()
            .with_prompt("Negative prompt")
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_err)?;
        let tags_line: String = Input::new()
            .with_prompt("Tags (comma-separated)")
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_err)?;
        let category: String = Input::new()
            .with_prompt("Category")
            .default("general".to_string())
            .interact_text()
            .map_err(map_dialoguer_err)?;

        let tags: Vec<String> = tags_line
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let mut record = PromptRecord::new(name, positive, negative, tags, category);

        match self.store.save(&mut record, false)? {
            SaveOutcome::Saved => {
                println!("{}", theme.format_success(&format!("Saved '{}'", record.name)));
                Ok(CommandResult::success())
            }
            SaveOutcome::Declined => {
                let overwrite = Confirm::new()
                    .with_prompt(format!("'{}' already exists. Overwrite?", record.name))
                    .default(false)
                    .interact()
                    .map_err(map_dialoguer_err)?;
                if !overwrite {
                    println!("{}", theme.format_warning("Not saved"));
                    return Ok(CommandResult::success());
                }
                self.store.save(&mut record, true)?;
                println!("{}", theme.format_success(&format!("Saved '{}'", record.name)));
                Ok(CommandResult::success())
            }
        }
    }
}
