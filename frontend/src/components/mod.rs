//! UI Components for the upload page.
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - File + email form, submission and feedback
//! - [`AlertBox`] - Success / destructive alert
//! - [`ProgressBar`] - Upload progress indicator

mod hero;
mod upload;
mod alert;
mod progress;
mod footer;

pub use hero::*;
pub use upload::*;
pub use alert::*;
pub use progress::*;
pub use footer::*;
