//! List command implementation.
//!
//! The `aihub list` command lists prompt records, optionally filtered by a
//! case-insensitive search over name, category, and tags.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::prompts::PromptStore;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    store: PromptStore,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(store: PromptStore, args: ListArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        let names = match &self.args.search {
            Some(query) => self.store.search(query),
            None => self.store.list(),
        };

        if names.is_empty() {
            match &self.args.search {
                Some(query) => println!("No prompts matching '{query}'"),
                None => println!("No prompts in library yet"),
            }
            return Ok(CommandResult::success());
        }

        for name in names {
            // Corrupt records still list by name; detail lines are best-effort.
            match self.store.load(&name) {
                Ok(Some(record)) => {
                    let detail = if record.tags.is_empty() {
                        record.category.clone()
                    } else {
                        format!("{} · {}", record.category, record.tags.join(", "))
                    };
                    println!("{name}  {}", theme.dim.apply_to(format!("({detail})")));
                }
                _ => println!("{name}"),
            }
        }
        Ok(CommandResult::success())
    }
}
