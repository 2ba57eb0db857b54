//! # Dropform - terminal upload client
//!
//! Drives the shared upload form ([`dropform_core::FormState`]) from the
//! command line and performs the actual HTTP upload with `reqwest`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  LocalFile  │────▶│  FormState  │────▶│  Uploader   │────▶│    Alert    │
//! │  + --email  │     │  (reducer)  │     │ (multipart) │     │  (stderr)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dropform::{config, session, LocalFile, Uploader};
//! use dropform_core::{FormEvent, FormState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut form = FormState::new(config::resolve(None));
//!     form.apply(FormEvent::FileSelected(Some(LocalFile::open("report.pdf").unwrap())));
//!     form.apply(FormEvent::EmailChanged("a@b.com".into()));
//!
//!     let uploader = Uploader::new().unwrap();
//!     let alert = session::submit(&mut form, &uploader, |_| {}).await;
//!     println!("{:?}", alert);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - CLI error types
//! - [`config`] - Server URL resolution
//! - [`file`] - Local file handle
//! - [`upload`] - Multipart upload with progress
//! - [`session`] - One form submission, start to alert

pub mod error;
pub mod config;
pub mod file;
pub mod upload;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CliError, CliResult};
pub use file::LocalFile;
pub use upload::{Uploader, CHUNK_SIZE};
