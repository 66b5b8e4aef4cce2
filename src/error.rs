//! Error types for aihub operations.
//!
//! This module defines [`HubError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HubError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `HubError::Other`) for unexpected errors
//! - Absence (missing record, missing GPU) is a normal outcome, not an error
//! - Collaborator failures degrade to placeholder values plus a warning;
//!   only terminal/environment faults abort the process

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for aihub operations.
#[derive(Debug, Error)]
pub enum HubError {
    /// A prompt record file exists but cannot be parsed or fails validation.
    #[error("Malformed prompt record at {path}: {message}")]
    MalformedRecord { path: PathBuf, message: String },

    /// A prompt record failed structural validation before saving.
    #[error("Invalid prompt record '{name}': {message}")]
    InvalidRecord { name: String, message: String },

    /// An import payload could not be parsed at all.
    #[error("Failed to parse import file {path}: {message}")]
    ImportParseError { path: PathBuf, message: String },

    /// An external launcher script could not be started.
    #[error("Failed to launch '{tool}': {message}")]
    LaunchFailed { tool: String, message: String },

    /// The terminal could not be initialized or driven.
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for aihub operations.
pub type Result<T> = std::result::Result<T, HubError>;
