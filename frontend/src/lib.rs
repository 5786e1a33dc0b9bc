//! HUD Ingest - upload hub frontend (Rust/Leptos)
//!
//! A WebAssembly frontend for uploading videos and image ZIP archives to
//! the ingest backend.
//!
//! # Pages
//!
//! ```text
//! /        upload hub
//!          ├── Hero
//!          ├── TabBar (Vídeo | ZIP de imágenes)
//!          ├── TabPanel(Video) → VideoUploadForm
//!          ├── TabPanel(Zip)   → ZipUploadForm
//!          ├── NoticeBanner (shared by both forms)
//!          └── Footer
//!
//! /video   standalone video uploader
//!          ├── Hero
//!          ├── VideoUploadForm
//!          ├── NoticeBanner
//!          └── Footer
//! ```
//!
//! # Modules
//!
//! - [`types`] - Source types, upload kinds, response body, errors
//! - [`state`] - Notice, busy and tab state
//! - [`services`] - Upload transport and submission flow
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod services;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    SourceType, UploadKind,
    // API
    ResponseBody, UploadOutcome,
    // Errors
    AppError, AppResult, ValidationError,
};

// State
pub use state::{BusyGuard, BusyState, BusyTarget, NoticeLevel, NoticeState, Tab, TabState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Panic hook and console logging. Called once before mounting.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadHub/>
                    <Route path="/video" view=VideoPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadHub() -> impl IntoView {
    let (notice, set_notice) = create_signal(NoticeState::default());
    let (tabs, set_tabs) = create_signal(TabState::new(Tab::Video));

    view! {
        <div class="container">
            <Hero
                title="Ingesta de datos"
                subtitle="Sube un vídeo o un ZIP de imágenes para iniciar la ingesta."
            />

            <TabBar tabs=tabs set_tabs=set_tabs notice=notice set_notice=set_notice/>

            <TabPanel tab=Tab::Video tabs=tabs>
                <VideoUploadForm set_notice=set_notice/>
            </TabPanel>
            <TabPanel tab=Tab::Zip tabs=tabs>
                <ZipUploadForm set_notice=set_notice/>
            </TabPanel>

            <NoticeBanner notice=notice/>
        </div>

        <Footer/>
    }
}

#[component]
fn VideoPage() -> impl IntoView {
    let (notice, set_notice) = create_signal(NoticeState::default());

    view! {
        <div class="container">
            <Hero
                title="Subir vídeo"
                subtitle="El vídeo se verifica contra duplicados antes de procesarse."
            />

            <VideoUploadForm set_notice=set_notice/>

            <NoticeBanner notice=notice/>
        </div>

        <Footer/>
    }
}
