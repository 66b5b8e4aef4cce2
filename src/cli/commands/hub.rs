//! Hub dashboard command.
//!
//! The `aihub hub` command opens the full dashboard. Without a terminal it
//! degrades to a one-shot status dump so scripted callers still get the
//! system and tool overview.

use console::Term;

use crate::capability::collect_snapshot;
use crate::engine::{Engine, View};
use crate::error::Result;
use crate::paths::HubPaths;
use crate::prompts::PromptStore;
use crate::tools::{statuses, KNOWN_TOOLS};
use crate::ui::{Align, Table, Theme};

use super::dispatcher::{Command, CommandResult};

/// The hub command implementation.
pub struct HubCommand {
    paths: HubPaths,
    store: PromptStore,
}

impl HubCommand {
    /// Create a new hub command.
    pub fn new(paths: HubPaths, store: PromptStore) -> Self {
        Self { paths, store }
    }
}

impl Command for HubCommand {
    fn execute(&self, theme: &Theme) -> Result<CommandResult> {
        if !Term::stdout().is_term() {
            print_status_dump(&self.paths, theme);
            return Ok(CommandResult::success());
        }

        let mut engine = Engine::new(self.paths.clone(), self.store.clone(), theme.clone());
        engine.run(View::MainMenu)?;
        Ok(CommandResult::success())
    }
}

/// Non-interactive overview: hardware snapshot and tool status.
pub fn print_status_dump(paths: &HubPaths, theme: &Theme) {
    let snapshot = collect_snapshot(paths.root());

    println!("{}", theme.format_header("AI Tools Hub"));
    println!("Hub: {}", paths.root().display());
    println!();
    println!("CPU:  {} ({} cores)", snapshot.cpu_name, snapshot.cpu_cores);
    println!(
        "RAM:  {:.1} GB total, {:.1} GB available",
        snapshot.ram_total_gb, snapshot.ram_available_gb
    );
    match (&snapshot.gpu_name, snapshot.vram_gb) {
        (Some(gpu), Some(vram)) => println!("GPU:  {gpu} ({vram:.1} GB VRAM)"),
        _ => println!("GPU:  none detected"),
    }
    println!("Disk: {:.1} GB free", snapshot.disk_free_gb);
    println!();

    let mut table = Table::with_aligns(
        vec!["Tool", "Installed", "Launcher", "Workspace", "Size"],
        vec![
            Align::Left,
            Align::Left,
            Align::Left,
            Align::Left,
            Align::Right,
        ],
    );
    for (name, status) in statuses(paths, KNOWN_TOOLS) {
        let size = if status.workspace_size_gb > 0.0 {
            format!("{:.2} GB", status.workspace_size_gb)
        } else {
            "0 MB".to_string()
        };
        table.add_row(vec![
            &name,
            if status.installed { "yes" } else { "no" },
            if status.launcher_present { "yes" } else { "no" },
            if status.workspace_present { "yes" } else { "no" },
            &size,
        ]);
    }
    println!("{}", table.render());
}
