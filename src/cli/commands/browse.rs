//! Prompt browser command.
//!
//! The `aihub browse` command (and the bare `aihub` invocation) opens the
//! prompt browser. Without a terminal it degrades to a plain listing.

use console::Term;

use crate::engine::{Engine, View};
use crate::error::Result;
use crate::paths::HubPaths;
use crate::prompts::PromptStore;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The browse command implementation.
pub struct BrowseCommand {
    paths: HubPaths,
    store: PromptStore,
}

impl BrowseCommand {
    /// Create a new browse command.
    pub fn new(paths: HubPaths, store: PromptStore) -> Self {
        Self { paths, store }
    }
}

impl Command for BrowseCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        if !Term::stdout().is_term() {
            let names = self.store.list();
            if names.is_empty() {
                println!("No prompts in library yet");
            } else {
                for name in names {
                    println!("{name}");
                }
            }
            return Ok(CommandResult::success());
        }

        let mut engine = Engine::new(self.paths.clone(), self.store.clone(), theme.clone());
        // An empty library has nothing to browse; start at the menu instead.
        let initial = if self.store.list().is_empty() {
            View::MainMenu
        } else {
            View::PromptBrowser
        };
        engine.run(initial)?;
        Ok(CommandResult::success())
    }
}
