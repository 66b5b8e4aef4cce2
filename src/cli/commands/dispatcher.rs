//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::paths::HubPaths;
use crate::prompts::PromptStore;
use crate::ui::Theme;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
/// The theme is the only presentation state a command receives.
pub trait Command {
    fn execute(&self, theme: &Theme) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    paths: HubPaths,
    library: String,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given hub layout and prompt library.
    pub fn new(paths: HubPaths, library: impl Into<String>) -> Self {
        Self {
            paths,
            library: library.into(),
        }
    }

    /// The hub root this dispatcher operates against.
    pub fn hub_root(&self) -> &Path {
        self.paths.root()
    }

    fn store(&self) -> Result<PromptStore> {
        PromptStore::open(self.paths.prompt_library_dir(&self.library))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand defaults to the prompt browser.
    pub fn dispatch(&self, cli: &Cli, theme: &Theme) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Hub) => {
                let cmd = super::hub::HubCommand::new(self.paths.clone(), self.store()?);
                cmd.execute(theme)
            }
            Some(Commands::Browse) | None => {
                let cmd = super::browse::BrowseCommand::new(self.paths.clone(), self.store()?);
                cmd.execute(theme)
            }
            Some(Commands::Add) => {
                let cmd = super::add::AddCommand::new(self.store()?);
                cmd.execute(theme)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.store()?, args.clone());
                cmd.execute(theme)
            }
            Some(Commands::View(args)) => {
                let cmd = super::view::ViewCommand::new(self.store()?, args.clone());
                cmd.execute(theme)
            }
            Some(Commands::Export(args)) => {
                let cmd = super::export::ExportCommand::new(self.store()?, args.clone());
                cmd.execute(theme)
            }
            Some(Commands::Import(args)) => {
                let cmd = super::import::ImportCommand::new(self.store()?, args.clone());
                cmd.execute(theme)
            }
            Some(Commands::Delete(args)) => {
                let cmd = super::delete::DeleteCommand::new(self.store()?, args.clone());
                cmd.execute(theme)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(theme)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_hub_root() {
        let dispatcher = CommandDispatcher::new(HubPaths::new("/data/ai"), "comfyui");
        assert_eq!(dispatcher.hub_root(), PathBuf::from("/data/ai"));
    }
}
