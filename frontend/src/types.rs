//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - source types and upload kinds
//! - **API Types** - backend response body and interpreted outcome
//! - **Error Types** - validation and transport errors

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{VIDEO_UPLOAD_PATH, ZIP_UPLOAD_PATH};

// =============================================================================
// Upload Types
// =============================================================================

/// Origin of the uploaded material.
///
/// Matches the values accepted by the ingest backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceType {
    /// Publicly available footage or images
    #[default]
    Public,
    /// Captured by our own devices
    Captured,
    /// Synthetic / simulated data
    Simulated,
}

impl SourceType {
    /// All source types, in the order the select lists them.
    pub const ALL: [SourceType; 3] = [SourceType::Public, SourceType::Captured, SourceType::Simulated];

    /// Wire value sent as the `source_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Public => "public",
            SourceType::Captured => "captured",
            SourceType::Simulated => "simulated",
        }
    }

    /// Label shown in the select.
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Public => "Público",
            SourceType::Captured => "Capturado",
            SourceType::Simulated => "Simulado",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "public" => Ok(SourceType::Public),
            "captured" => Ok(SourceType::Captured),
            "simulated" => Ok(SourceType::Simulated),
            other => Err(ValidationError::InvalidSourceType(other.to_string())),
        }
    }
}

/// Which of the two upload workflows a submission belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    /// Single video file
    Video,
    /// ZIP archive of images
    Zip,
}

impl UploadKind {
    /// Endpoint path the form posts to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Video => VIDEO_UPLOAD_PATH,
            UploadKind::Zip => ZIP_UPLOAD_PATH,
        }
    }

    /// Multipart field name carrying the file.
    pub fn file_field(&self) -> &'static str {
        match self {
            UploadKind::Video => "video",
            UploadKind::Zip => "zipfile",
        }
    }

    /// Status label shown next to the submit button while in flight.
    pub fn busy_text(&self) -> &'static str {
        match self {
            UploadKind::Video => "Subiendo y verificando…",
            UploadKind::Zip => "Subiendo ZIP…",
        }
    }

    /// Confirmation shown once the backend accepted the upload.
    pub fn success_message(&self) -> &'static str {
        match self {
            UploadKind::Video => "Vídeo subido. Procesamiento iniciado.",
            UploadKind::Zip => "ZIP subido. Descompresión e ingesta iniciadas.",
        }
    }

    /// Only the video endpoint reports duplicates.
    pub fn reports_duplicates(&self) -> bool {
        matches!(self, UploadKind::Video)
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Video => f.write_str("video"),
            UploadKind::Zip => f.write_str("zip"),
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Best-effort view of an upload response body.
///
/// Anything that is not a JSON object reads as an empty object, so a proxy
/// error page or an empty body never turns into a parse error. Fields are
/// read with JavaScript truthiness since the backend is loose about types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseBody(Map<String, Value>);

impl ResponseBody {
    /// Parse a raw body, degrading to an empty object.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Self(map),
            Ok(_) => Self::default(),
            Err(e) => {
                if !text.trim().is_empty() {
                    log::debug!("Response body is not JSON ({}), treating as empty", e);
                }
                Self::default()
            }
        }
    }

    /// Whether `key` is present and truthy.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }

    /// Server-supplied `message`, if it carries anything.
    pub fn message(&self) -> Option<String> {
        match self.0.get("message")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            v if is_truthy(v) => Some(v.to_string()),
            _ => None,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpreted result of a settled upload request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Accepted; processing started server-side.
    Success,
    /// The video already exists (video endpoint only).
    Duplicate,
    /// Rejected, or the request never completed.
    Failure(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Pre-flight form errors. Raised before any network activity.
///
/// The display text is what the notice shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No video selected.
    #[error("Selecciona un vídeo.")]
    MissingVideo,

    /// No ZIP selected.
    #[error("Selecciona un ZIP.")]
    MissingZip,

    /// Selected archive is not a `.zip`.
    #[error("El archivo debe ser .zip")]
    NotZip,

    /// Dataset name blank after trimming.
    #[error("dataset_name es obligatorio.")]
    MissingDatasetName,

    /// Select carried a value the backend does not accept.
    #[error("source_type inválido: '{0}'. Usa public/captured/simulated.")]
    InvalidSourceType(String),
}

/// Frontend application errors.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// The multipart body could not be assembled.
    #[error("No se pudo preparar el formulario: {0}")]
    Payload(String),

    /// Network/HTTP error: the request did not complete.
    #[error("{0}")]
    Network(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
