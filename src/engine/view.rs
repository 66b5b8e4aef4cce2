//! Views, semantic actions, and the key table binding them.
//!
//! Keys never reach view logic directly: every discrete key event resolves
//! through [`action_for`] into a tagged [`Action`], and unrecognized keys
//! resolve to nothing (the view re-renders unchanged).

use console::Key;

/// One screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    MainMenu,
    ToolLaunch,
    SystemAndStorage,
    ModelManagement,
    ModelCleanup,
    RequirementCheck,
    ThemeSelector,
    PromptBrowser,
    PromptDetail,
}

impl View {
    /// Number of views; sizes the per-view selection tables.
    pub const COUNT: usize = 9;

    /// Stable index for per-view state tables.
    pub fn index(self) -> usize {
        match self {
            View::MainMenu => 0,
            View::ToolLaunch => 1,
            View::SystemAndStorage => 2,
            View::ModelManagement => 3,
            View::ModelCleanup => 4,
            View::RequirementCheck => 5,
            View::ThemeSelector => 6,
            View::PromptBrowser => 7,
            View::PromptDetail => 8,
        }
    }

    /// Title rendered at the top of the view.
    pub fn title(self) -> &'static str {
        match self {
            View::MainMenu => "AI Tools Hub",
            View::ToolLaunch => "Launch AI Tool",
            View::SystemAndStorage => "System & Storage",
            View::ModelManagement => "Model Management",
            View::ModelCleanup => "Model Cleanup",
            View::RequirementCheck => "Check Model Requirements",
            View::ThemeSelector => "Theme",
            View::PromptBrowser => "Prompt Library",
            View::PromptDetail => "Prompt",
        }
    }

    /// The view a `Back` action returns to.
    pub fn parent(self) -> Option<View> {
        match self {
            View::MainMenu => None,
            View::PromptDetail => Some(View::PromptBrowser),
            View::ModelCleanup => Some(View::ModelManagement),
            _ => Some(View::MainMenu),
        }
    }
}

/// Semantic action resolved from one key event in one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the selection up, wrapping.
    MoveUp,
    /// Move the selection down, wrapping.
    MoveDown,
    /// Invoke the view's primary action on the selected item.
    Activate,
    /// Return to the enclosing view.
    Back,
    /// End the run loop.
    Quit,
    /// Transition to the tool launch view.
    OpenTools,
    /// Transition to the system & storage view.
    OpenSystem,
    /// Transition to the model management view.
    OpenModels,
    /// Transition to the requirement check view.
    OpenRequirements,
    /// Transition to the prompt browser.
    OpenPrompts,
    /// Transition to the theme selector.
    OpenThemes,
    /// Transition to the model cleanup view.
    OpenCleanup,
    /// Ask for confirmation, then delete the selected prompt.
    DeletePrompt,
    /// Export the selected prompt as plain text.
    ExportPrompt,
    /// Copy the selected prompt's positive text to the clipboard.
    CopyPrompt,
    /// Ask for confirmation, then delete the selected checkpoint file.
    DeleteCheckpoint,
    /// Re-probe and re-render the current view.
    Refresh,
}

/// Resolve a key event in a view to an action. `None` means the key is
/// ignored and the view re-renders unchanged.
pub fn action_for(view: View, key: &Key) -> Option<Action> {
    // Navigation keys shared by every list-backed view.
    if view != View::SystemAndStorage && view != View::PromptDetail {
        match key {
            Key::ArrowUp | Key::Char('k') => return Some(Action::MoveUp),
            Key::ArrowDown | Key::Char('j') => return Some(Action::MoveDown),
            Key::Enter => return Some(Action::Activate),
            _ => {}
        }
    }

    match (view, key) {
        // Quit is offered from the main menu; everywhere else q/Esc backs out.
        (View::MainMenu, Key::Char('q')) | (View::MainMenu, Key::Escape) => Some(Action::Quit),
        (_, Key::Char('q')) | (_, Key::Escape) => Some(Action::Back),

        // Main menu shortcuts mirror the original dashboard keys.
        (View::MainMenu, Key::Char('l')) => Some(Action::OpenTools),
        (View::MainMenu, Key::Char('s')) => Some(Action::OpenSystem),
        (View::MainMenu, Key::Char('m')) => Some(Action::OpenModels),
        (View::MainMenu, Key::Char('c')) => Some(Action::OpenRequirements),
        (View::MainMenu, Key::Char('p')) => Some(Action::OpenPrompts),
        (View::MainMenu, Key::Char('t')) => Some(Action::OpenThemes),

        (View::SystemAndStorage, Key::Char('r')) => Some(Action::Refresh),
        (View::ModelManagement, Key::Char('c')) => Some(Action::OpenRequirements),
        (View::ModelManagement, Key::Char('d')) => Some(Action::OpenCleanup),
        (View::ModelCleanup, Key::Char('d')) => Some(Action::DeleteCheckpoint),
        (View::RequirementCheck, Key::Char('r')) => Some(Action::Refresh),

        (View::PromptBrowser, Key::Char('d')) => Some(Action::DeletePrompt),
        (View::PromptBrowser, Key::Char('e')) => Some(Action::ExportPrompt),
        (View::PromptBrowser, Key::Char('c')) => Some(Action::CopyPrompt),
        (View::PromptDetail, Key::Char('e')) => Some(Action::ExportPrompt),
        (View::PromptDetail, Key::Char('c')) => Some(Action::CopyPrompt),

        _ => None,
    }
}
