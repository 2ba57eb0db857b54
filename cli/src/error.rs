//! Error types for the terminal client.
//!
//! Upload failures are not errors here: they end up as a destructive alert
//! on the form. [`CliError`] covers what prevents the form from running.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before or around a submission.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to inspect the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Path exists but is not a regular file.
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
