//! # Dropform Core - upload form model
//!
//! Everything the upload form does that does not depend on a UI toolkit or an
//! HTTP client lives here, so the web front-end and the terminal front-end
//! share the exact same behaviour.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ FileSelected│────▶│   Submit    │────▶│  UploadJob  │────▶│   Finished  │
//! │ EmailChanged│     │ (validate)  │     │ (platform)  │     │   (alert)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The platform layer owns the transport: it executes the [`UploadJob`]
//! returned by [`FormState::apply`] and feeds progress and the final result
//! back as [`FormEvent`]s.
//!
//! ## Quick Start
//!
//! ```rust
//! use dropform_core::{ClientConfig, FormEvent, FormState};
//!
//! let mut form = FormState::new(ClientConfig::default());
//! form.apply(FormEvent::FileSelected(Some("report.pdf")));
//! form.apply(FormEvent::EmailChanged("a@b.com".into()));
//!
//! let job = form.apply(FormEvent::Submit).expect("valid input starts an upload");
//! assert_eq!(job.url, "http://localhost:3000/api/upload");
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Endpoint configuration and fixed wire names
//! - [`error`] - Validation / service / transport error taxonomy
//! - [`validation`] - Client-side input checks
//! - [`progress`] - Percentage math for the progress indicator
//! - [`types`] - Alerts, outcomes and the upload API response
//! - [`form`] - Form state and its reducer

// Core modules
pub mod config;
pub mod error;

// Input handling
pub mod validation;
pub mod progress;

// Model
pub mod types;
pub mod form;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    ClientConfig,
    DEFAULT_SERVER_URL,
    SERVER_URL_ENV,
    UPLOAD_PATH,
    FILE_FIELD,
    EMAIL_FIELD,
};

pub use error::{UploadError, UploadResult, ValidationError};

pub use validation::{is_valid_email, validate};

pub use progress::{percent_of, ProgressState, TransferProgress};

pub use types::{
    Alert,
    AlertKind,
    UploadApiResponse,
    UploadOutcome,
    UploadRequest,
    SUCCESS_MESSAGE,
    GENERIC_ERROR_MESSAGE,
};

pub use form::{FormEvent, FormState, Phase, UploadJob};
