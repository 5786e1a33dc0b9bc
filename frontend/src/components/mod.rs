//! UI Components for the upload hub.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`NoticeBanner`] - Single-slot outcome notice
//! - [`TabBar`] / [`TabPanel`] - Video / ZIP panel switching
//! - [`VideoUploadForm`] - Video upload
//! - [`ZipUploadForm`] - Image ZIP upload
//! - [`SubmitControl`] - Submit button with busy state

mod hero;
mod footer;
mod notice;
mod tabs;
mod controls;
mod video_form;
mod zip_form;

pub use hero::*;
pub use footer::*;
pub use notice::*;
pub use tabs::*;
pub use controls::{SourceTypeSelect, SubmitControl};
pub use video_form::*;
pub use zip_form::*;
