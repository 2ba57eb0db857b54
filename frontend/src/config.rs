//! Application configuration.
//!
//! The server base URL is baked in at build time:
//! `DROPFORM_SERVER_URL=https://files.example.org trunk build --release`.

use dropform_core::DEFAULT_SERVER_URL;

/// Upload service base URL.
///
/// Falls back to the local development server.
pub const SERVER_URL: &str = match option_env!("DROPFORM_SERVER_URL") {
    Some(url) => url,
    None => DEFAULT_SERVER_URL,
};

/// Page title.
pub const APP_TITLE: &str = "Upload Service";

/// Tagline under the title.
pub const APP_TAGLINE: &str = "No questions asked. Just free storage.";
