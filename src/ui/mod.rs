//! Terminal presentation: theme palette and table rendering.
//!
//! Presentation stays thin. The theme is a plain value owned by whoever
//! renders (the navigation engine or a CLI command) and threaded through
//! calls; there is no process-global palette.

mod clipboard;
mod table;
mod theme;

pub use clipboard::copy_to_clipboard;
pub use table::{Align, Table};
pub use theme::{detect_theme, load_theme, save_theme_preference, should_use_colors, Theme, ThemeId};
