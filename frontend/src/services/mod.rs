//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload to `/api/upload` with progress events

pub mod upload;

pub use upload::*;
