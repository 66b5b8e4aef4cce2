//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// aihub - Console for local AI tools, models, and prompt libraries.
#[derive(Debug, Parser)]
#[command(name = "aihub")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the hub root (overrides ~/Projects/ai)
    #[arg(long, global = true, value_name = "PATH")]
    pub hub: Option<PathBuf>,

    /// Prompt library to operate on
    #[arg(short, long, global = true, default_value = "comfyui")]
    pub library: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the full hub dashboard
    Hub,

    /// Browse the prompt library (default if no command specified)
    Browse,

    /// Add a prompt record interactively
    Add,

    /// List prompt records
    List(ListArgs),

    /// Show one prompt record
    View(ViewArgs),

    /// Export a prompt record as plain text
    Export(ExportArgs),

    /// Import prompt records from a JSON file
    Import(ImportArgs),

    /// Delete a prompt record
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only records matching this query (name, category, or tag)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

/// Arguments for the `view` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ViewArgs {
    /// Record name
    pub name: String,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Record name
    pub name: String,

    /// Output file (defaults to ./<NAME>.txt)
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// JSON file holding one record object or an array of them
    pub file: PathBuf,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// Record name
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["aihub"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.library, "comfyui");
        assert!(cli.hub.is_none());
    }

    #[test]
    fn parses_global_hub_after_subcommand() {
        let cli = Cli::try_parse_from(["aihub", "list", "--hub", "/tmp/hub"]).unwrap();
        assert_eq!(cli.hub, Some(PathBuf::from("/tmp/hub")));
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn parses_export_with_output() {
        let cli = Cli::try_parse_from(["aihub", "export", "sunset", "/tmp/sunset.txt"]).unwrap();
        match cli.command {
            Some(Commands::Export(args)) => {
                assert_eq!(args.name, "sunset");
                assert_eq!(args.output, Some(PathBuf::from("/tmp/sunset.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn delete_requires_name() {
        assert!(Cli::try_parse_from(["aihub", "delete"]).is_err());
        let cli = Cli::try_parse_from(["aihub", "delete", "old", "--yes"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => {
                assert_eq!(args.name, "old");
                assert!(args.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
