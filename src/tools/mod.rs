//! Known AI tools: identity, derived status, and launching.
//!
//! A [`ToolEntry`] is static identity (command name, workspace name); a
//! [`ToolStatus`] is derived from disk and PATH state and is recomputed on
//! every render rather than cached, since installs and workspaces change
//! between views.

mod launcher;
mod registry;

pub use launcher::{launch_tool, LaunchOutcome};
pub use registry::{
    available_launchers, statuses, ToolEntry, ToolStatus, KNOWN_TOOLS,
};
