//! Upload form state and its reducer.
//!
//! All transitions go through [`FormState::apply`]. A submission moves
//! through
//!
//! ```text
//! Idle ──Submit──▶ (validation failed) ──▶ Idle + destructive alert
//!   │
//!   └──Submit──▶ Uploading ──Finished──▶ Idle + success / destructive alert
//! ```
//!
//! The reducer never performs I/O. A valid submit returns an [`UploadJob`]
//! that the platform layer executes, reporting back with
//! [`FormEvent::UploadProgress`] and [`FormEvent::UploadFinished`].

use crate::config::ClientConfig;
use crate::error::{UploadError, UploadResult};
use crate::progress::{percent_of, ProgressState, TransferProgress};
use crate::types::{Alert, UploadOutcome, UploadRequest};
use crate::validation::validate;

/// Coarse lifecycle of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
}

/// Input to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent<F> {
    /// User picked a file (or cleared the picker).
    FileSelected(Option<F>),
    /// Email input changed.
    EmailChanged(String),
    /// Form submitted (button click or Enter).
    Submit,
    /// Transport reported bytes sent for an attempt.
    UploadProgress {
        attempt: u64,
        progress: TransferProgress,
    },
    /// Transport finished an attempt.
    UploadFinished {
        attempt: u64,
        result: UploadResult<UploadOutcome>,
    },
}

/// Upload the platform layer has to perform.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadJob<F> {
    /// Attempt id to echo back in progress / finished events
    pub attempt: u64,
    /// File to send under the `file` field
    pub file: F,
    /// Validated email, sent under the `email` field
    pub email: String,
    /// Full upload endpoint URL
    pub url: String,
}

/// State of one upload form instance.
#[derive(Debug, Clone)]
pub struct FormState<F> {
    config: ClientConfig,
    request: UploadRequest<F>,
    phase: Phase,
    progress: ProgressState,
    alert: Option<Alert>,
    attempt: u64,
}

impl<F> FormState<F> {
    /// Empty form posting to `config`'s endpoint.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            request: UploadRequest::default(),
            phase: Phase::Idle,
            progress: ProgressState::default(),
            alert: None,
            attempt: 0,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn request(&self) -> &UploadRequest<F> {
        &self.request
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == Phase::Uploading
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    /// Alert currently displayed, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Id of the latest started upload (0 before the first one).
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.is_uploading() && attempt == self.attempt
    }
}

impl<F: Clone> FormState<F> {
    /// Apply an event and return the upload to start, if any.
    pub fn apply(&mut self, event: FormEvent<F>) -> Option<UploadJob<F>> {
        match event {
            FormEvent::FileSelected(file) => {
                self.request.file = file;
                None
            }
            FormEvent::EmailChanged(email) => {
                self.request.email = email;
                None
            }
            FormEvent::Submit => self.submit(),
            FormEvent::UploadProgress { attempt, progress } => {
                if self.is_current(attempt) {
                    self.progress.percent = percent_of(progress.loaded, progress.total);
                }
                None
            }
            FormEvent::UploadFinished { attempt, result } => {
                if !self.is_current(attempt) {
                    log::debug!("Ignoring result of stale upload #{}", attempt);
                    return None;
                }
                if let Err(ref err) = result {
                    log::warn!("Upload #{} failed: {}", attempt, err);
                }
                self.phase = Phase::Idle;
                self.progress.is_active = false;
                self.alert = Some(Alert::from_result(&result));
                None
            }
        }
    }

    fn submit(&mut self) -> Option<UploadJob<F>> {
        if self.is_uploading() {
            log::debug!("Submit ignored, upload #{} still in flight", self.attempt);
            return None;
        }

        self.alert = None;
        self.progress = ProgressState::default();

        if let Err(err) = validate(self.request.file.as_ref(), &self.request.email) {
            self.alert = Some(Alert::from_result(&Err(UploadError::from(err))));
            return None;
        }

        let file = self.request.file.clone()?;
        self.attempt += 1;
        self.phase = Phase::Uploading;
        self.progress = ProgressState::started();

        let url = self.config.upload_url();
        log::info!("Starting upload #{} to {}", self.attempt, url);

        Some(UploadJob {
            attempt: self.attempt,
            file,
            email: self.request.email.clone(),
            url,
        })
    }
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
