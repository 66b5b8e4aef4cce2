//! aihub - Console for local AI tools, models, and prompt libraries.
//!
//! aihub is a keyboard-driven dashboard over a fixed directory layout
//! (default `~/Projects/ai`): it launches installed AI tools, reports
//! hardware capacity against model requirement profiles, inventories model
//! checkpoints, and manages JSON prompt libraries.
//!
//! # Modules
//!
//! - [`capability`] - Hardware capability snapshots (CPU, RAM, GPU, disk)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - Keyboard-driven navigation engine and views
//! - [`error`] - Error types and result aliases
//! - [`models`] - Model checkpoint inventory
//! - [`paths`] - Fixed hub directory layout
//! - [`prompts`] - Prompt record store (CRUD, search, import/export)
//! - [`requirements`] - Model requirement profiles and evaluation
//! - [`tools`] - Known tool registry and launcher execution
//! - [`ui`] - Theme palette and table rendering
//!
//! # Example
//!
//! ```
//! use aihub::requirements::{evaluate, profile_ids};
//! use aihub::capability::CapabilitySnapshot;
//!
//! let snapshot = CapabilitySnapshot {
//!     cpu_name: "Example CPU".into(),
//!     cpu_cores: 8,
//!     ram_total_gb: 32.0,
//!     ram_available_gb: 24.0,
//!     gpu_name: Some("Example GPU".into()),
//!     vram_gb: Some(12.0),
//!     disk_free_gb: 100.0,
//! };
//! for id in profile_ids() {
//!     let verdict = evaluate(id, &snapshot);
//!     println!("{id}: {}", verdict.meets);
//! }
//! ```

pub mod capability;
pub mod cli;
pub mod engine;
pub mod error;
pub mod models;
pub mod paths;
pub mod prompts;
pub mod requirements;
pub mod tools;
pub mod ui;

pub use error::{HubError, Result};
