//! Endpoint configuration.
//!
//! The only external setting is the server base URL. Front-ends resolve it
//! their own way (build-time env for the web app, flag / env / `.env` for the
//! CLI) and hand it over as a [`ClientConfig`].

/// Server base URL used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Environment variable holding the server base URL.
pub const SERVER_URL_ENV: &str = "DROPFORM_SERVER_URL";

/// Path of the upload endpoint, appended to the base URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the email address.
pub const EMAIL_FIELD: &str = "email";

/// Where uploads are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: String,
}

impl ClientConfig {
    /// Create a config for the given base URL.
    ///
    /// Trailing slashes are dropped so `http://host/` and `http://host`
    /// produce the same upload URL.
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL of the upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.server_url, UPLOAD_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
