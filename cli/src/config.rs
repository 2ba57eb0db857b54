//! Server URL resolution.
//!
//! Order: `--server` flag, then `DROPFORM_SERVER_URL` (a `.env` file in the
//! working directory is loaded first), then the built-in default.

use std::env;

use dropform_core::{ClientConfig, DEFAULT_SERVER_URL, SERVER_URL_ENV};

/// Resolve the client config from the flag and the environment.
pub fn resolve(server: Option<String>) -> ClientConfig {
    let _ = dotenvy::dotenv();
    resolve_with(server, env::var(SERVER_URL_ENV).ok())
}

fn resolve_with(flag: Option<String>, env_value: Option<String>) -> ClientConfig {
    let non_empty = |value: &String| !value.trim().is_empty();

    let url = flag
        .filter(non_empty)
        .or_else(|| env_value.filter(non_empty))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    log::debug!("Using server {}", url);
    ClientConfig::new(url.trim())
}
