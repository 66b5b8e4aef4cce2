//! Delete command implementation.
//!
//! The `aihub delete` command removes one record after confirmation.
//! Deleting a missing record reports not-found without failing the
//! invariant that nothing was mutated.

use dialoguer::Confirm;

use crate::cli::args::DeleteArgs;
use crate::error::Result;
use crate::prompts::{DeleteOutcome, PromptStore};
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};
use super::map_dialoguer_err;

/// The delete command implementation.
pub struct DeleteCommand {
    store: PromptStore,
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(store: PromptStore, args: DeleteArgs) -> Self {
        Self { store, args }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        if !self.args.yes {
            if !console::Term::stdout().is_term() {
                eprintln!("refusing to delete without a terminal; pass --yes to confirm");
                return Ok(CommandResult::failure(2));
            }
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete '{}'?", self.args.name))
                .default(false)
                .interact()
                .map_err(map_dialoguer_err)?;
            if !confirmed {
                println!("{}", theme.format_warning("Delete cancelled"));
                return Ok(CommandResult::success());
            }
        }

        match self.store.delete(&self.args.name)? {
            DeleteOutcome::Deleted => {
                println!(
                    "{}",
                    theme.format_success(&format!("Deleted '{}'", self.args.name))
                );
                Ok(CommandResult::success())
            }
            DeleteOutcome::NotFound => {
                eprintln!(
                    "{}",
                    theme.format_warning(&format!("'{}' not found", self.args.name))
                );
                Ok(CommandResult::failure(1))
            }
        }
    }
}
