//! Dropform - Frontend Rust/Leptos Application
//!
//! A WebAssembly page with a single form: pick a file, enter an email,
//! upload, and get told to check your inbox for the download link.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, tagline)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadForm                                                  │
//! │  ├── AlertBox (after a submission)                          │
//! │  ├── file input, email input, Upload button                 │
//! │  └── ProgressBar (while uploading)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form behaviour (validation, progress, alerts) lives in
//! [`dropform_core::FormState`]; this crate renders it and runs the
//! browser upload.
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration
//! - [`components`] - UI components
//! - [`services`] - Browser upload transport

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Hero/>
        <UploadForm/>
        <Footer/>
    }
}
