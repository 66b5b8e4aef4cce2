//! Visual theme and styling.
//!
//! A [`Theme`] is a value, not ambient state: it is loaded once at startup
//! (preference file, else auto-detection) and handed to render calls. The
//! only way it changes is the explicit theme-change action, which also
//! persists the preference file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use console::Style;

use crate::paths::HubPaths;

/// Identifier stored in the theme preference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    Dark,
    Light,
    Plain,
}

impl ThemeId {
    /// All selectable identifiers, in presentation order.
    pub fn all() -> [ThemeId; 3] {
        [ThemeId::Dark, ThemeId::Light, ThemeId::Plain]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
            ThemeId::Plain => "plain",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(ThemeId::Dark),
            "light" => Ok(ThemeId::Light),
            "plain" => Ok(ThemeId::Plain),
            _ => Err(()),
        }
    }
}

/// Style palette threaded through render calls.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Which palette this is.
    pub id: ThemeId,
    /// Style for success states (installed, requirement met).
    pub success: Style,
    /// Style for warnings and degraded values.
    pub warning: Style,
    /// Style for errors and failed checks.
    pub error: Style,
    /// Style for headers and panel titles.
    pub header: Style,
    /// Style for the selected row marker.
    pub selected: Style,
    /// Style for dim/secondary text (hints, unselected rows).
    pub dim: Style,
    /// Style for highlighted/important text.
    pub highlight: Style,
    /// Style for key labels in key-value displays.
    pub key: Style,
    /// Style for values in key-value displays.
    pub value: Style,
}

impl Theme {
    /// Build the palette for an identifier.
    pub fn new(id: ThemeId) -> Self {
        match id {
            ThemeId::Dark => Self {
                id,
                success: Style::new().green(),
                warning: Style::new().color256(208),
                error: Style::new().red().bold(),
                header: Style::new().cyan().bold(),
                selected: Style::new().green().bold(),
                dim: Style::new().dim(),
                highlight: Style::new().bold(),
                key: Style::new().cyan(),
                value: Style::new(),
            },
            ThemeId::Light => Self {
                id,
                success: Style::new().green(),
                warning: Style::new().yellow(),
                error: Style::new().red().bold(),
                header: Style::new().blue().bold(),
                selected: Style::new().blue().bold(),
                dim: Style::new().black().bright(),
                highlight: Style::new().bold(),
                key: Style::new().blue(),
                value: Style::new(),
            },
            ThemeId::Plain => Self {
                id,
                success: Style::new(),
                warning: Style::new(),
                error: Style::new(),
                header: Style::new(),
                selected: Style::new(),
                dim: Style::new(),
                highlight: Style::new(),
                key: Style::new(),
                value: Style::new(),
            },
        }
    }

    /// Format a success message (icon + text).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {msg}")))
    }

    /// Format a warning message (icon + text).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {msg}")))
    }

    /// Format an error message (icon + text).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {msg}")))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format one row of a selectable list.
    pub fn format_list_row(&self, label: &str, selected: bool) -> String {
        if selected {
            format!("  {}", self.selected.apply_to(format!("▶ {label}")))
        } else {
            format!("  {}", self.dim.apply_to(format!("  {label}")))
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeId::Dark)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    console::Term::stdout().is_term()
}

/// Load the startup theme: preference file first, else auto-detection.
pub fn load_theme(paths: &HubPaths) -> Theme {
    let id = read_preference(&paths.theme_preference_file())
        .unwrap_or_else(|| detect_theme(dirs::home_dir().as_deref()));
    Theme::new(id)
}

/// Persist a theme choice to the preference file.
pub fn save_theme_preference(paths: &HubPaths, id: ThemeId) -> crate::error::Result<()> {
    let file = paths.theme_preference_file();
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file, format!("{id}\n"))?;
    Ok(())
}

fn read_preference(file: &Path) -> Option<ThemeId> {
    let content = fs::read_to_string(file).ok()?;
    content.lines().next()?.parse().ok()
}

/// Auto-detect a theme from known editor configuration files.
///
/// Scans nvim, vim, and VS Code configs for a recognizable light/dark
/// keyword and falls back to the minimal dark palette if none match.
pub fn detect_theme(home: Option<&Path>) -> ThemeId {
    let Some(home) = home else {
        return ThemeId::Dark;
    };

    let candidates = [
        home.join(".config/nvim/init.lua"),
        home.join(".config/nvim/init.vim"),
        home.join(".vimrc"),
        home.join(".config/Code/User/settings.json"),
    ];

    for path in &candidates {
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        if let Some(id) = theme_keyword(&content) {
            tracing::debug!(config = %path.display(), theme = %id, "auto-detected theme");
            return id;
        }
    }

    ThemeId::Dark
}

/// Find a light/dark keyword in an editor config body.
fn theme_keyword(content: &str) -> Option<ThemeId> {
    let lower = content.to_lowercase();
    // `background=light`, `"workbench.colorTheme": "... Light ..."`, etc.
    if lower.contains("background=light")
        || lower.contains("background = \"light\"")
        || lower.contains("light+")
        || lower.contains("solarized-light")
        || lower.contains("solarized light")
    {
        return Some(ThemeId::Light);
    }
    if lower.contains("background=dark")
        || lower.contains("background = \"dark\"")
        || lower.contains("dark+")
        || lower.contains("tokyonight")
        || lower.contains("gruvbox")
        || lower.contains("catppuccin")
        || lower.contains("dracula")
    {
        return Some(ThemeId::Dark);
    }
    None
}
