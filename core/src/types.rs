//! Common types used by the form and its front-ends.
//!
//! # Categories
//!
//! - **Request** - what the user entered
//! - **API** - the upload service response and its outcome
//! - **Alert** - what the form renders after a submission

use serde::{Deserialize, Serialize};

use crate::error::{UploadError, UploadResult};

/// Confirmation shown after a successful upload.
pub const SUCCESS_MESSAGE: &str =
    "File uploaded successfully! Check your email for the download link.";

/// Shown for transport failures and for rejections without a message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while uploading the file!";

// =============================================================================
// Request Types
// =============================================================================

/// User input held by the form.
///
/// `F` is the platform file handle. Input persists across submissions until
/// the user changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<F> {
    /// Selected file, if any
    pub file: Option<F>,
    /// Email as typed
    pub email: String,
}

impl<F> Default for UploadRequest<F> {
    fn default() -> Self {
        Self {
            file: None,
            email: String::new(),
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Response body of `POST /api/upload`.
///
/// Either `{"success": true}` or `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UploadApiResponse {
    /// Parse a response body.
    ///
    /// A body that is not a valid response is a transport error, whatever
    /// the HTTP status was.
    pub fn parse(body: &str) -> UploadResult<UploadOutcome> {
        let response: UploadApiResponse = serde_json::from_str(body)
            .map_err(|e| UploadError::Transport(format!("Failed to parse response: {}", e)))?;
        Ok(response.into())
    }
}

impl From<UploadApiResponse> for UploadOutcome {
    fn from(response: UploadApiResponse) -> Self {
        if response.success {
            UploadOutcome::Success
        } else {
            UploadOutcome::Failure {
                message: response
                    .message
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            }
        }
    }
}

/// What the service decided about an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success,
    Failure { message: String },
}

// =============================================================================
// Alert Types
// =============================================================================

/// Alert variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Error / warning
    Destructive,
    /// Confirmation
    Success,
}

/// Feedback rendered above the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    /// Error alert ("Heads up!").
    pub fn destructive(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Destructive,
            title: "Heads up!",
            message: message.into(),
        }
    }

    /// Confirmation alert ("Success!").
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: "Success!",
            message: message.into(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.kind == AlertKind::Destructive
    }

    /// Alert for a finished upload.
    pub fn from_result(result: &UploadResult<UploadOutcome>) -> Self {
        match result {
            Ok(UploadOutcome::Success) => Alert::success(SUCCESS_MESSAGE),
            Ok(UploadOutcome::Failure { message }) => Alert::destructive(message.clone()),
            Err(err) => Alert::destructive(err.alert_message()),
        }
    }
}
