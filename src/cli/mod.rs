//! Command-line interface for the hub console.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations behind the [`Command`] trait

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, DeleteArgs, ExportArgs, ImportArgs, ListArgs, ViewArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
