//! Fixed directory layout of the AI hub.
//!
//! Everything the console touches lives under one hub root
//! (default `~/Projects/ai`):
//!
//! ```text
//! ai/
//! ├── configs/              tool configuration (and the theme preference file)
//! ├── workspaces/<tool>/    one workspace per tool
//! ├── models/checkpoints/   *.safetensors model files
//! ├── scripts/              launch-<tool>.sh launcher scripts
//! └── prompts/
//!     ├── comfyui/          prompt libraries, one JSON file per record
//!     ├── general/
//!     └── templates/
//! ```

use std::path::{Path, PathBuf};

/// File extension for model checkpoint files.
pub const CHECKPOINT_EXTENSION: &str = "safetensors";

/// Prefix of launcher script file names (`launch-<tool>.sh`).
pub const LAUNCHER_PREFIX: &str = "launch-";

/// Suffix of launcher script file names.
pub const LAUNCHER_SUFFIX: &str = ".sh";

/// Prompt library subdirectories shipped with the hub.
pub const PROMPT_LIBRARIES: &[&str] = &["comfyui", "general", "templates"];

/// Resolved hub directory layout.
#[derive(Debug, Clone)]
pub struct HubPaths {
    root: PathBuf,
}

impl HubPaths {
    /// Create a layout rooted at an explicit path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The default hub root: `~/Projects/ai`.
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join("Projects")
            .join("ai")
    }

    /// Resolve the layout from an optional override, falling back to the
    /// default root.
    pub fn resolve(root_override: Option<&Path>) -> Self {
        match root_override {
            Some(root) => Self::new(root),
            None => Self::new(Self::default_root()),
        }
    }

    /// The hub root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Tool configuration area.
    pub fn configs_dir(&self) -> PathBuf {
        self.root.join("configs")
    }

    /// Workspaces area; one subdirectory per tool.
    pub fn workspaces_dir(&self) -> PathBuf {
        self.root.join("workspaces")
    }

    /// Workspace directory for a single tool.
    pub fn workspace_dir(&self, workspace_name: &str) -> PathBuf {
        self.workspaces_dir().join(workspace_name)
    }

    /// Models area.
    pub fn models_dir(&self) -> PathBuf {
        self.root.join("models")
    }

    /// Checkpoint directory holding model files.
    pub fn checkpoints_dir(&self) -> PathBuf {
        self.models_dir().join("checkpoints")
    }

    /// Scripts area holding one launcher per tool.
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("scripts")
    }

    /// Launcher script path for a tool (`scripts/launch-<tool>.sh`).
    pub fn launcher_script(&self, tool: &str) -> PathBuf {
        self.scripts_dir()
            .join(format!("{LAUNCHER_PREFIX}{tool}{LAUNCHER_SUFFIX}"))
    }

    /// Prompts area.
    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join("prompts")
    }

    /// One prompt library subdirectory (`comfyui`, `general`, `templates`).
    pub fn prompt_library_dir(&self, library: &str) -> PathBuf {
        self.prompts_dir().join(library)
    }

    /// Theme preference file: a single-line theme identifier.
    pub fn theme_preference_file(&self) -> PathBuf {
        self.configs_dir().join("theme")
    }
}

/// Extract the tool name from a launcher script file name, if it follows the
/// `launch-<tool>.sh` convention.
pub fn tool_from_launcher(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(LAUNCHER_PREFIX)?
        .strip_suffix(LAUNCHER_SUFFIX)
}
