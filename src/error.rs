//! Error types for genctemplate operations.
//!
//! This module defines [`GenctemplateError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GenctemplateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GenctemplateError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for genctemplate operations.
#[derive(Debug, Error)]
pub enum GenctemplateError {
    /// Requested template name is not in the registry.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// The template file cannot be located or opened. This is a local
    /// installation problem, not a programming error.
    #[error("Template not available at {path}: {reason}")]
    TemplateUnavailable { path: PathBuf, reason: String },

    /// The home directory cannot be resolved, so the default template
    /// root cannot be computed.
    #[error("Cannot locate home directory; set HOME or pass --root")]
    NoHomeDirectory,

    /// The destination path cannot be created or written.
    #[error("Cannot write destination {path}: {reason}")]
    DestinationUnwritable { path: PathBuf, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for genctemplate operations.
pub type Result<T> = std::result::Result<T, GenctemplateError>;
