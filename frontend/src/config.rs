//! Application configuration.
//!
//! Centralized configuration for the ingest frontend. Values are fixed at
//! compile time; the backend origin can be overridden when building with
//! `INGEST_BACKEND_URL` set.

/// Backend API base URL.
///
/// Empty means same-origin: the hub is served by the ingest backend itself.
pub const BACKEND_URL: &str = match option_env!("INGEST_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Video upload endpoint path.
pub const VIDEO_UPLOAD_PATH: &str = "/api/upload-video";

/// Image ZIP upload endpoint path.
pub const ZIP_UPLOAD_PATH: &str = "/api/upload-images-zip";

/// Provider sent when the provider field is left blank.
pub const DEFAULT_PROVIDER: &str = "unknown";

/// Application name shown in the page title.
pub const APP_NAME: &str = "HUD Ingest";

/// Failure text used when the server gives no message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Ha ocurrido un error durante el proceso.";
