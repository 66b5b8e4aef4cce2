//! Tool registry: static identities and freshly derived status.

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::capability::dir_size_gb;
use crate::paths::{tool_from_launcher, HubPaths};

/// Static identity of one known tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    /// Tool name as presented in menus and launcher file names.
    pub name: &'static str,
    /// Binary looked up on PATH to decide `installed`.
    pub command_name: &'static str,
    /// Subdirectory of the workspaces area.
    pub workspace_name: &'static str,
}

/// The tools the hub knows about.
pub const KNOWN_TOOLS: &[ToolEntry] = &[
    ToolEntry { name: "claude", command_name: "claude", workspace_name: "claude" },
    ToolEntry { name: "crush", command_name: "crush", workspace_name: "crush" },
    ToolEntry { name: "gemini", command_name: "gemini", workspace_name: "gemini" },
    ToolEntry { name: "ollama", command_name: "ollama", workspace_name: "ollama" },
    ToolEntry { name: "lmstudio", command_name: "lmstudio", workspace_name: "lmstudio" },
    ToolEntry { name: "qwen", command_name: "qwen", workspace_name: "qwen" },
    ToolEntry { name: "opencode", command_name: "opencode", workspace_name: "opencode" },
];

/// Derived facts about one tool, valid only for the render that requested
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolStatus {
    pub installed: bool,
    pub launcher_present: bool,
    pub workspace_present: bool,
    pub workspace_size_gb: f64,
}

/// Compute fresh status for every entry. The `BTreeMap` keeps presentation
/// order lexicographic regardless of the entry table's order.
pub fn statuses(paths: &HubPaths, entries: &[ToolEntry]) -> BTreeMap<String, ToolStatus> {
    entries
        .iter()
        .map(|entry| {
            let launcher = paths.launcher_script(entry.name);
            let workspace = paths.workspace_dir(entry.workspace_name);
            let workspace_present = workspace.is_dir();
            let status = ToolStatus {
                installed: command_on_path(entry.command_name),
                launcher_present: launcher.is_file(),
                workspace_present,
                workspace_size_gb: if workspace_present {
                    dir_size_gb(&workspace)
                } else {
                    0.0
                },
            };
            (entry.name.to_string(), status)
        })
        .collect()
}

/// Tool names with a launcher script present, sorted lexicographically.
///
/// Tools without a launcher are simply absent; an unreadable scripts
/// directory yields an empty list rather than an error.
pub fn available_launchers(paths: &HubPaths) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(paths.scripts_dir()) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| {
                let file_name = e.file_name();
                tool_from_launcher(&file_name.to_string_lossy()).map(str::to_string)
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// Check whether a binary is reachable via PATH.
fn command_on_path(command: &str) -> bool {
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path_var).any(|dir| is_executable(&dir.join(command)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
