//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`], which routes CLI subcommands to
//! their implementations and threads the shared hub layout, library choice,
//! and theme through them.

pub mod add;
pub mod browse;
pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod export;
pub mod hub;
pub mod import;
pub mod list;
pub mod view;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// Convert dialoguer errors to HubError.
pub(crate) fn map_dialoguer_err(e: dialoguer::Error) -> crate::error::HubError {
    crate::error::HubError::Io(e.into())
}
