//! Resume Parser - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a resume to the extraction backend
//! and shows the structured data it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns RwSignal<UploadController>)               │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (pick file, submit, error banner)        │
//! │  └── ResultSection (JSON view, export)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint and export constants
//! - [`error`] - Upload and export errors
//! - [`types`] - File handle trait, request state, request ids
//! - [`controller`] - Selection and submit state machine
//! - [`render`] - View model and export action
//! - [`components`] - UI components
//! - [`services`] - Backend request and file download

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod controller;
pub mod render;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{ExportError, UploadError};

// Types
pub use types::{ExtractionResult, RequestId, RequestState, SubmitTicket, UploadFile};

// State
pub use controller::UploadController;
pub use render::{export_result, pretty_json, RenderFacets, PLACEHOLDER_TEXT};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
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
    let controller = create_rw_signal(UploadController::<File>::new());

    view! {
        <div class="container">
            <Hero/>

            <div class="panels">
                <UploadSection controller=controller/>
                <ResultSection controller=controller/>
            </div>
        </div>
    }
}
