//! Error types for the upload flow.
//!
//! - [`ValidationError`] - local input checks, recovered in place
//! - [`UploadError`] - everything that can end a submission attempt
//!
//! Every variant ends the current attempt only. The form always goes back
//! to idle and the user can submit again.

use thiserror::Error;

use crate::types::GENERIC_ERROR_MESSAGE;

// =============================================================================
// Validation Errors
// =============================================================================

/// Input rejected before any network call.
///
/// The `Display` output is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No file was picked.
    #[error("Please select a file to upload!")]
    MissingFile,

    /// Email is empty or has no `@`.
    #[error("Please enter a valid email address!")]
    InvalidEmail,
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Any failure of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Local validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered `success: false`.
    #[error("Upload rejected: {0}")]
    Service(String),

    /// Network failure or a response body that does not parse.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl UploadError {
    /// Text for the destructive alert.
    ///
    /// Service messages pass through verbatim. Transport details are kept
    /// out of the UI and replaced by the generic message.
    pub fn alert_message(&self) -> String {
        match self {
            UploadError::Validation(err) => err.to_string(),
            UploadError::Service(message) => message.clone(),
            UploadError::Transport(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
