//! Engine state, key dispatch, and view rendering.

use std::path::PathBuf;

use console::{Key, Term};

use crate::capability::{collect_snapshot, dir_size_gb, CapabilitySnapshot};
use crate::error::{HubError, Result};
use crate::models::{list_checkpoints, remove_checkpoint, total_size_gb, RemoveOutcome};
use crate::paths::HubPaths;
use crate::prompts::{DeleteOutcome, ExportOutcome, PromptStore};
use crate::requirements::{evaluate, profile, profile_ids, Verdict};
use crate::tools::{available_launchers, launch_tool, statuses, KNOWN_TOOLS};
use crate::ui::{copy_to_clipboard, save_theme_preference, Align, Table, Theme, ThemeId};

use super::view::{action_for, Action, View};

/// Whether the run loop keeps going after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Seam for destructive-action confirmation, so the engine can be driven
/// in tests without a terminal.
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Production confirmer backed by dialoguer.
pub struct DialogConfirmer {
    term: Term,
}

impl DialogConfirmer {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for DialogConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmer for DialogConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        // A prompt failure counts as "no": declining is always safe.
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_on(&self.term)
            .unwrap_or(false)
    }
}

/// Main menu sections; `None` is the quit entry.
const MAIN_SECTIONS: &[(&str, Option<View>)] = &[
    ("Launch a tool", Some(View::ToolLaunch)),
    ("System & storage", Some(View::SystemAndStorage)),
    ("Model management", Some(View::ModelManagement)),
    ("Check model requirements", Some(View::RequirementCheck)),
    ("Prompt library", Some(View::PromptBrowser)),
    ("Theme", Some(View::ThemeSelector)),
    ("Quit", None),
];

/// The navigation engine: a blocking read-key / apply / render loop.
///
/// All displayed lists are re-derived fresh on every key event and every
/// render; nothing is assumed stable across events. The engine is the only
/// component that initiates view transitions.
pub struct Engine {
    term: Term,
    paths: HubPaths,
    store: PromptStore,
    theme: Theme,
    view: View,
    selection: [usize; View::COUNT],
    last_counts: [Option<usize>; View::COUNT],
    /// Inline, dismissible message shown under the current view.
    notice: Option<String>,
    /// Requirement verdict overlay for the model management view.
    verdict: Option<(String, Verdict)>,
    /// Name of the record shown in the prompt detail view.
    detail: Option<String>,
    confirmer: Box<dyn Confirmer>,
    export_dir: PathBuf,
}

impl Engine {
    pub fn new(paths: HubPaths, store: PromptStore, theme: Theme) -> Self {
        let export_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            term: Term::stdout(),
            paths,
            store,
            theme,
            view: View::MainMenu,
            selection: [0; View::COUNT],
            last_counts: [None; View::COUNT],
            notice: None,
            verdict: None,
            detail: None,
            confirmer: Box::new(DialogConfirmer::new()),
            export_dir,
        }
    }

    /// Replace the confirmation seam (tests use a scripted confirmer).
    pub fn with_confirmer(mut self, confirmer: Box<dyn Confirmer>) -> Self {
        self.confirmer = confirmer;
        self
    }

    /// Override where `e` exports records to (default: home directory).
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Current view, for callers and tests.
    pub fn view(&self) -> View {
        self.view
    }

    /// Current selection index of a view.
    pub fn selection(&self, view: View) -> usize {
        self.selection[view.index()]
    }

    /// Active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run the loop from an initial view until a quit transition.
    ///
    /// Key-read failures are the fatal class: the terminal itself is
    /// unusable. The screen is cleared on the way out so the terminal is
    /// left in a usable state.
    pub fn run(&mut self, initial: View) -> Result<()> {
        self.view = initial;
        let result = loop {
            if let Err(e) = self.render() {
                break Err(e);
            }
            let key = match self.term.read_key() {
                Ok(key) => key,
                Err(e) => {
                    break Err(HubError::Terminal {
                        message: e.to_string(),
                    })
                }
            };
            match self.handle_key(&key) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.term.clear_screen().ok();
        result
    }

    /// Process one discrete key event.
    ///
    /// Re-derives the current item list, clamps the selection, resolves the
    /// key through the action table, and applies it. Unrecognized keys are
    /// ignored.
    pub fn handle_key(&mut self, key: &Key) -> Result<Flow> {
        // Any key dismisses the previous inline notice.
        self.notice = None;

        let items = self.items(self.view);
        self.clamp_selection(self.view, items.len());

        let Some(action) = action_for(self.view, key) else {
            return Ok(Flow::Continue);
        };
        self.apply(action, &items)
    }

    /// Derive the current view's item list, fresh.
    fn items(&self, view: View) -> Vec<String> {
        match view {
            View::MainMenu => MAIN_SECTIONS
                .iter()
                .map(|(label, _)| label.to_string())
                .collect(),
            View::ToolLaunch => available_launchers(&self.paths),
            View::ModelManagement | View::RequirementCheck => {
                profile_ids().iter().map(|id| id.to_string()).collect()
            }
            View::ModelCleanup => list_checkpoints(&self.paths)
                .into_iter()
                .map(|file| file.file_name)
                .collect(),
            View::ThemeSelector => ThemeId::all()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            View::PromptBrowser => self.store.list(),
            View::SystemAndStorage | View::PromptDetail => Vec::new(),
        }
    }

    /// Keep the selection inside `[0, count - 1]`. A cardinality change
    /// resets to the top; otherwise the index wraps by modulo.
    fn clamp_selection(&mut self, view: View, count: usize) {
        let idx = view.index();
        match self.last_counts[idx] {
            Some(prev) if prev == count && count > 0 => {
                self.selection[idx] %= count;
            }
            _ => self.selection[idx] = 0,
        }
        self.last_counts[idx] = Some(count);
    }

    fn apply(&mut self, action: Action, items: &[String]) -> Result<Flow> {
        let count = items.len();
        let idx = self.view.index();

        match action {
            Action::MoveUp => {
                if count > 0 {
                    self.selection[idx] = (self.selection[idx] + count - 1) % count;
                }
            }
            Action::MoveDown => {
                if count > 0 {
                    self.selection[idx] = (self.selection[idx] + 1) % count;
                }
            }
            Action::Activate => return self.activate(items),
            Action::Back => {
                let target = self.view.parent().unwrap_or(View::MainMenu);
                self.go_to(target);
            }
            Action::Quit => return Ok(Flow::Quit),
            Action::OpenTools => self.go_to(View::ToolLaunch),
            Action::OpenSystem => self.go_to(View::SystemAndStorage),
            Action::OpenModels => self.go_to(View::ModelManagement),
            Action::OpenRequirements => self.go_to(View::RequirementCheck),
            Action::OpenPrompts => self.go_to(View::PromptBrowser),
            Action::OpenThemes => self.go_to(View::ThemeSelector),
            Action::OpenCleanup => self.go_to(View::ModelCleanup),
            Action::DeletePrompt => self.delete_selected(items),
            Action::ExportPrompt => self.export_selected(items),
            Action::CopyPrompt => self.copy_selected(items),
            Action::DeleteCheckpoint => self.delete_selected_checkpoint(items),
            // The snapshot is re-probed on every render; refresh is just a
            // re-render.
            Action::Refresh => {}
        }
        Ok(Flow::Continue)
    }

    fn go_to(&mut self, view: View) {
        if view != View::ModelManagement {
            self.verdict = None;
        }
        self.view = view;
    }

    fn activate(&mut self, items: &[String]) -> Result<Flow> {
        let sel = self.selection[self.view.index()];
        match self.view {
            View::MainMenu => {
                if let Some((_, target)) = MAIN_SECTIONS.get(sel) {
                    match target {
                        Some(view) => self.go_to(*view),
                        None => return Ok(Flow::Quit),
                    }
                }
            }
            View::ToolLaunch => {
                if let Some(tool) = items.get(sel) {
                    let tool = tool.clone();
                    self.launch(&tool);
                } else {
                    self.notice = Some(self.theme.format_warning("No launchers found"));
                }
            }
            View::ModelManagement | View::RequirementCheck => {
                if let Some(id) = items.get(sel) {
                    let snapshot = collect_snapshot(self.paths.root());
                    self.verdict = Some((id.clone(), evaluate(id, &snapshot)));
                }
            }
            View::ModelCleanup => self.delete_selected_checkpoint(items),
            View::ThemeSelector => {
                if let Some(id) = items.get(sel).and_then(|s| s.parse::<ThemeId>().ok()) {
                    self.theme = Theme::new(id);
                    match save_theme_preference(&self.paths, id) {
                        Ok(()) => {
                            self.notice =
                                Some(self.theme.format_success(&format!("Theme set to {id}")))
                        }
                        Err(e) => {
                            self.notice = Some(
                                self.theme
                                    .format_warning(&format!("Theme applied but not saved: {e}")),
                            )
                        }
                    }
                }
            }
            View::PromptBrowser => {
                if let Some(name) = items.get(sel) {
                    match self.store.load(name) {
                        Ok(Some(_)) => {
                            self.detail = Some(name.clone());
                            self.go_to(View::PromptDetail);
                        }
                        Ok(None) => {
                            self.notice = Some(
                                self.theme.format_warning(&format!("'{name}' not found")),
                            );
                        }
                        Err(e) => {
                            self.notice = Some(self.theme.format_warning(&e.to_string()));
                        }
                    }
                }
            }
            // No primary action on these views.
            View::SystemAndStorage | View::PromptDetail => {}
        }
        Ok(Flow::Continue)
    }

    fn delete_selected(&mut self, items: &[String]) {
        if self.view != View::PromptBrowser {
            return;
        }
        let sel = self.selection[self.view.index()];
        let Some(name) = items.get(sel).cloned() else {
            return;
        };

        if !self.confirmer.confirm(&format!("Delete '{name}'?")) {
            // User declined: no mutation, same as not-found.
            self.notice = Some(self.theme.format_warning("Delete cancelled"));
            return;
        }

        match self.store.delete(&name) {
            Ok(DeleteOutcome::Deleted) => {
                self.notice = Some(self.theme.format_success(&format!("Deleted '{name}'")));
            }
            Ok(DeleteOutcome::NotFound) => {
                self.notice = Some(self.theme.format_warning(&format!("'{name}' not found")));
            }
            Err(e) => {
                self.notice = Some(self.theme.format_warning(&e.to_string()));
            }
        }

        // The cardinality changed: put the selection back in range now, not
        // on the next key event, and fall back to the enclosing view when
        // the library empties.
        let remaining = self.store.list().len();
        self.reset_after_removal(View::PromptBrowser, remaining, View::MainMenu);
    }

    /// After an item removal, reset the view's selection to the top and
    /// record the new count; an emptied list falls back to the enclosing
    /// view.
    fn reset_after_removal(&mut self, view: View, remaining: usize, fallback: View) {
        let idx = view.index();
        self.selection[idx] = 0;
        self.last_counts[idx] = Some(remaining);
        if remaining == 0 {
            self.go_to(fallback);
        }
    }

    /// Copy the selected record's positive prompt to the clipboard.
    fn copy_selected(&mut self, items: &[String]) {
        let name = match self.view {
            View::PromptBrowser => items.get(self.selection[self.view.index()]).cloned(),
            View::PromptDetail => self.detail.clone(),
            _ => None,
        };
        let Some(name) = name else {
            return;
        };

        match self.store.load(&name) {
            Ok(Some(record)) => match copy_to_clipboard(&record.positive) {
                Some(_) => {
                    self.notice = Some(
                        self.theme
                            .format_success(&format!("Copied '{name}' to clipboard")),
                    );
                }
                None => {
                    self.notice = Some(self.theme.format_warning(
                        "No clipboard tool found (install xclip or wl-clipboard)",
                    ));
                }
            },
            Ok(None) => {
                self.notice = Some(self.theme.format_warning(&format!("'{name}' not found")));
            }
            Err(e) => {
                self.notice = Some(self.theme.format_warning(&e.to_string()));
            }
        }
    }

    /// Confirm, then delete the selected checkpoint file.
    fn delete_selected_checkpoint(&mut self, items: &[String]) {
        if self.view != View::ModelCleanup {
            return;
        }
        let sel = self.selection[self.view.index()];
        let Some(name) = items.get(sel).cloned() else {
            return;
        };

        if !self.confirmer.confirm(&format!("Really delete {name}?")) {
            self.notice = Some(self.theme.format_warning("Delete cancelled"));
            return;
        }

        match remove_checkpoint(&self.paths, &name) {
            Ok(RemoveOutcome::Removed) => {
                self.notice = Some(self.theme.format_success(&format!("Removed {name}")));
            }
            Ok(RemoveOutcome::NotFound) => {
                self.notice = Some(self.theme.format_warning(&format!("{name} not found")));
            }
            Err(e) => {
                self.notice = Some(self.theme.format_warning(&e.to_string()));
            }
        }

        let remaining = list_checkpoints(&self.paths).len();
        self.reset_after_removal(View::ModelCleanup, remaining, View::ModelManagement);
    }

    fn export_selected(&mut self, items: &[String]) {
        let name = match self.view {
            View::PromptBrowser => items.get(self.selection[self.view.index()]).cloned(),
            View::PromptDetail => self.detail.clone(),
            _ => None,
        };
        let Some(name) = name else {
            return;
        };

        let destination = self.export_dir.join(format!("{name}.txt"));
        match self.store.export_text(&name, &destination) {
            Ok(ExportOutcome::Exported) => {
                self.notice = Some(
                    self.theme
                        .format_success(&format!("Exported to {}", destination.display())),
                );
            }
            Ok(ExportOutcome::NotFound) => {
                self.notice = Some(self.theme.format_warning(&format!("'{name}' not found")));
            }
            Err(e) => {
                self.notice = Some(self.theme.format_warning(&e.to_string()));
            }
        }
    }

    /// Hand the terminal to a tool's launcher and block until it exits.
    ///
    /// The selection index is untouched, so the view comes back exactly as
    /// it was left.
    fn launch(&mut self, tool: &str) {
        self.term.clear_screen().ok();
        self.line(&self.theme.format_header(&format!("Launching {tool}...")));
        self.line(&format!(
            "{}",
            self.theme.dim.apply_to(format!(
                "Workspace: {}",
                self.paths.workspace_dir(tool).display()
            ))
        ));
        self.line("");

        match launch_tool(&self.paths, tool) {
            Ok(outcome) => {
                self.line("");
                if outcome.success() {
                    self.line(&self.theme.format_success(&format!("{tool} exited successfully")));
                } else {
                    let code = outcome
                        .exit_code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "signal".to_string());
                    self.line(
                        &self
                            .theme
                            .format_warning(&format!("{tool} exited with code {code}")),
                    );
                }
            }
            Err(e) => {
                self.line("");
                self.line(&self.theme.format_warning(&e.to_string()));
            }
        }

        if self.term.is_term() {
            self.line("");
            self.line(&format!(
                "{}",
                self.theme.dim.apply_to("Press any key to return to the menu...")
            ));
            self.term.read_key().ok();
        }
    }

    fn line(&self, text: &str) {
        self.term.write_line(text).ok();
    }

    /// Render the current view.
    fn render(&mut self) -> Result<()> {
        let items = self.items(self.view);
        self.clamp_selection(self.view, items.len());

        self.term
            .clear_screen()
            .map_err(|e| HubError::Terminal {
                message: e.to_string(),
            })?;

        self.line(&self.theme.format_header(self.view.title()));
        self.line(&format!(
            "{}",
            self.theme
                .dim
                .apply_to(format!("Hub: {}", self.paths.root().display()))
        ));
        self.line("");

        match self.view {
            View::MainMenu => self.render_list(&items),
            View::ToolLaunch => self.render_tool_launch(&items),
            View::SystemAndStorage => self.render_system_and_storage(),
            View::ModelManagement => self.render_model_management(&items),
            View::ModelCleanup => self.render_model_cleanup(&items),
            View::RequirementCheck => self.render_requirement_check(&items),
            View::ThemeSelector => self.render_theme_selector(&items),
            View::PromptBrowser => self.render_prompt_browser(&items),
            View::PromptDetail => self.render_prompt_detail(),
        }

        if let Some(notice) = &self.notice {
            self.line("");
            self.line(notice);
        }

        self.line("");
        self.line(&format!("{}", self.theme.dim.apply_to(self.hint_line())));
        Ok(())
    }

    fn hint_line(&self) -> &'static str {
        match self.view {
            View::MainMenu => {
                "↑/k up • ↓/j down • Enter select • l tools • s system • m models • c check • p prompts • t theme • q quit"
            }
            View::ToolLaunch => "↑/k up • ↓/j down • Enter launch • q back",
            View::SystemAndStorage => "r refresh • q back",
            View::ModelManagement => {
                "↑/k up • ↓/j down • Enter check • c full check • d cleanup • q back"
            }
            View::ModelCleanup => "↑/k up • ↓/j down • Enter/d delete • q back",
            View::RequirementCheck => "↑/k up • ↓/j down • Enter re-check • r refresh • q back",
            View::ThemeSelector => "↑/k up • ↓/j down • Enter apply • q back",
            View::PromptBrowser => {
                "↑/k up • ↓/j down • Enter view • c copy • e export • d delete • q back"
            }
            View::PromptDetail => "c copy • e export • q back",
        }
    }

    fn render_list(&self, items: &[String]) {
        let sel = self.selection[self.view.index()];
        for (i, label) in items.iter().enumerate() {
            self.line(&self.theme.format_list_row(label, i == sel));
        }
    }

    fn render_tool_launch(&self, items: &[String]) {
        if items.is_empty() {
            self.line(&self.theme.format_warning("No launchers found"));
            self.line(&format!(
                "{}",
                self.theme
                    .dim
                    .apply_to("Install AI tools to use this hub.")
            ));
            return;
        }
        self.render_list(items);
    }

    fn render_system_and_storage(&self) {
        let snapshot = collect_snapshot(self.paths.root());

        self.line(&self.snapshot_table(&snapshot).render());
        self.line("");

        // Storage breakdown.
        let mut storage = Table::with_aligns(
            vec!["Directory", "Size", "Description"],
            vec![Align::Left, Align::Right, Align::Left],
        );
        let areas = [
            (self.paths.configs_dir(), "Tool configuration"),
            (self.paths.checkpoints_dir(), "Model checkpoints"),
            (self.paths.workspaces_dir(), "All workspaces"),
            (self.paths.scripts_dir(), "Launcher scripts"),
            (self.paths.prompts_dir(), "Prompt libraries"),
        ];
        let mut total = 0.0;
        for (dir, description) in &areas {
            if dir.exists() {
                let size = dir_size_gb(dir);
                total += size;
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                storage.add_row(vec![&name, &format!("{size:.2} GB"), description]);
            }
        }
        storage.add_row(vec!["Total", &format!("{total:.2} GB"), ""]);
        self.line(&storage.render());
        self.line("");

        // Tool status.
        let mut tools = Table::with_aligns(
            vec!["Tool", "Installed", "Launcher", "Workspace", "Size"],
            vec![
                Align::Left,
                Align::Left,
                Align::Left,
                Align::Left,
                Align::Right,
            ],
        );
        for (name, status) in statuses(&self.paths, KNOWN_TOOLS) {
            let size = if status.workspace_size_gb > 0.0 {
                format!("{:.2} GB", status.workspace_size_gb)
            } else {
                "0 MB".to_string()
            };
            tools.add_row(vec![
                &name,
                mark(status.installed),
                mark(status.launcher_present),
                mark(status.workspace_present),
                &size,
            ]);
        }
        self.line(&tools.render());
    }

    fn snapshot_table(&self, snapshot: &CapabilitySnapshot) -> Table {
        let mut table = Table::new(vec!["Component", "Specification", "Status"]);

        table.add_row(vec![
            "CPU",
            &snapshot.cpu_name,
            &format!("{} cores", snapshot.cpu_cores),
        ]);

        let ram_pct = if snapshot.ram_total_gb > 0.0 {
            snapshot.ram_available_gb / snapshot.ram_total_gb * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            "RAM",
            &format!("{:.1} GB total", snapshot.ram_total_gb),
            &format!(
                "{:.1} GB available ({ram_pct:.0}%)",
                snapshot.ram_available_gb
            ),
        ]);

        match (&snapshot.gpu_name, snapshot.vram_gb) {
            (Some(gpu), Some(vram)) => {
                table.add_row(vec!["GPU", gpu, &format!("{vram:.1} GB VRAM")]);
            }
            _ => {
                table.add_row(vec!["GPU", "No NVIDIA GPU detected", "Not available"]);
            }
        }

        table.add_row(vec![
            "Disk",
            &format!("{:.1} GB free", snapshot.disk_free_gb),
            "",
        ]);
        table
    }

    fn render_model_management(&self, items: &[String]) {
        let checkpoints = list_checkpoints(&self.paths);
        if checkpoints.is_empty() {
            self.line(&format!(
                "{}",
                self.theme.dim.apply_to("No checkpoint files found")
            ));
        } else {
            let mut table = Table::with_aligns(
                vec!["Model", "Size", "Type"],
                vec![Align::Left, Align::Right, Align::Left],
            );
            for file in &checkpoints {
                table.add_row(vec![
                    &file.file_name,
                    &format!("{:.2} GB", file.size_gb),
                    file.kind,
                ]);
            }
            table.add_row(vec![
                &format!("Total: {} models", checkpoints.len()),
                &format!("{:.2} GB", total_size_gb(&checkpoints)),
                "",
            ]);
            self.line(&table.render());
        }

        self.line("");
        self.line(&format!(
            "{}",
            self.theme.highlight.apply_to("Check requirements for:")
        ));
        self.render_profile_list(items);

        // Computed overlay from the last Enter press; no view transition.
        if let Some((id, verdict)) = &self.verdict {
            self.line("");
            self.render_verdict(id, verdict);
        }
    }

    fn render_model_cleanup(&self, items: &[String]) {
        if items.is_empty() {
            self.line(&format!(
                "{}",
                self.theme.dim.apply_to("No models to clean up")
            ));
            return;
        }

        let sel = self.selection[self.view.index()];
        let checkpoints = list_checkpoints(&self.paths);
        for (i, name) in items.iter().enumerate() {
            let label = match checkpoints.iter().find(|f| &f.file_name == name) {
                Some(file) => format!("{name} ({:.2} GB)", file.size_gb),
                None => name.clone(),
            };
            self.line(&self.theme.format_list_row(&label, i == sel));
        }
    }

    fn render_requirement_check(&self, items: &[String]) {
        let snapshot = collect_snapshot(self.paths.root());
        self.line(&self.snapshot_table(&snapshot).render());
        self.line("");
        self.render_profile_list(items);

        let sel = self.selection[self.view.index()];
        if let Some(id) = items.get(sel) {
            let verdict = evaluate(id, &snapshot);
            self.line("");
            self.render_verdict(id, &verdict);
        }
    }

    fn render_profile_list(&self, items: &[String]) {
        let sel = self.selection[self.view.index()];
        for (i, id) in items.iter().enumerate() {
            let label = match profile(id) {
                Some(req) => format!(
                    "{} — RAM {}GB · VRAM {}GB · Disk {}GB",
                    req.name, req.ram_gb, req.vram_gb, req.disk_gb
                ),
                None => id.clone(),
            };
            self.line(&self.theme.format_list_row(&label, i == sel));
        }
    }

    fn render_verdict(&self, id: &str, verdict: &Verdict) {
        if verdict.meets {
            self.line(
                &self
                    .theme
                    .format_success(&format!("Your system meets the requirements for {id}")),
            );
        } else {
            self.line(
                &self
                    .theme
                    .format_error(&format!("Your system does not meet requirements for {id}:")),
            );
            for issue in &verdict.issues {
                self.line(&format!("  {}", self.theme.warning.apply_to(format!("• {issue}"))));
            }
        }
    }

    fn render_theme_selector(&self, items: &[String]) {
        let sel = self.selection[self.view.index()];
        for (i, id) in items.iter().enumerate() {
            let current = self.theme.id.as_str() == id;
            let label = if current {
                format!("{id} (current)")
            } else {
                id.clone()
            };
            self.line(&self.theme.format_list_row(&label, i == sel));
        }
    }

    fn render_prompt_browser(&self, items: &[String]) {
        if items.is_empty() {
            self.line(&self.theme.format_warning("No prompts in library yet!"));
            self.line(&format!(
                "{}",
                self.theme
                    .dim
                    .apply_to("Create your first prompt with: aihub add")
            ));
            return;
        }
        self.render_list(items);
    }

    fn render_prompt_detail(&self) {
        let Some(name) = &self.detail else {
            self.line(&self.theme.format_warning("No prompt selected"));
            return;
        };
        match self.store.load(name) {
            Ok(Some(record)) => {
                self.line(&format!(
                    "{}  {}",
                    self.theme.highlight.apply_to(&record.name),
                    self.theme
                        .dim
                        .apply_to(format!("{} • {}", record.category, record.tags.join(", ")))
                ));
                self.line("");
                self.line(&format!("{}", self.theme.success.apply_to("Positive:")));
                self.line(&record.positive);
                self.line("");
                self.line(&format!("{}", self.theme.error.apply_to("Negative:")));
                self.line(&record.negative);

                if let Some(settings) = &record.settings {
                    self.line("");
                    self.line(&format!("{}", self.theme.key.apply_to("Settings:")));
                    let dump = serde_json::to_string_pretty(settings)
                        .unwrap_or_else(|_| "{}".to_string());
                    self.line(&dump);
                }
                if let Some(notes) = &record.notes {
                    self.line("");
                    self.line(&format!("{}", self.theme.key.apply_to("Notes:")));
                    self.line(notes);
                }
            }
            Ok(None) => {
                self.line(&self.theme.format_warning(&format!("'{name}' not found")));
            }
            Err(e) => {
                self.line(&self.theme.format_warning(&e.to_string()));
            }
        }
    }
}

fn mark(present: bool) -> &'static str {
    if present {
        "✓"
    } else {
        "✗"
    }
}
