//! HTTP upload of multipart forms to the ingest backend.
//!
//! The request itself goes through [`UploadTransport`] so the submission
//! flow can run against an in-memory transport in tests. [`HttpTransport`]
//! is the browser implementation built on `gloo-net` and `FormData`.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{BACKEND_URL, GENERIC_FAILURE_MESSAGE};
use crate::types::{AppError, AppResult, ResponseBody, UploadKind, UploadOutcome};

/// A file picked in a form's file input.
pub trait SelectedFile {
    fn file_name(&self) -> String;
}

impl SelectedFile for File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum Part<F> {
    File(F),
    Text(String),
}

/// Ordered multipart body, independent of the browser `FormData` type.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<(&'static str, Part<F>)>,
}

impl<F> Default for MultipartPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> MultipartPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &'static str, file: F) -> Self {
        self.parts.push((name, Part::File(file)));
        self
    }

    pub fn with_text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.parts.push((name, Part::Text(value.into())));
        self
    }

    pub fn parts(&self) -> &[(&'static str, Part<F>)] {
        &self.parts
    }

    /// Value of the first text part called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, part)| match part {
            Part::Text(value) if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The first file part called `name`.
    pub fn file(&self, name: &str) -> Option<&F> {
        self.parts.iter().find_map(|(n, part)| match part {
            Part::File(file) if *n == name => Some(file),
            _ => None,
        })
    }
}

/// A validated upload, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest<F> {
    pub kind: UploadKind,
    pub payload: MultipartPayload<F>,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a multipart body to an endpoint.
///
/// `Err` means the request did not complete at all. Any HTTP status,
/// including 4xx/5xx, comes back as `Ok`.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File;

    async fn post(&self, endpoint: &str, payload: &MultipartPayload<Self::File>) -> AppResult<RawResponse>;
}

/// Browser transport: `fetch` through `gloo-net` with a `FormData` body.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl UploadTransport for HttpTransport {
    type File = File;

    async fn post(&self, endpoint: &str, payload: &MultipartPayload<File>) -> AppResult<RawResponse> {
        let form_data = to_form_data(payload)?;

        let url = self.url(endpoint);
        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable body is handled like an empty one
        let body = response.text().await.unwrap_or_else(|e| {
            log::warn!("Could not read response body from {}: {}", url, e);
            String::new()
        });

        Ok(RawResponse { status, body })
    }
}

fn to_form_data(payload: &MultipartPayload<File>) -> AppResult<FormData> {
    let form_data =
        FormData::new().map_err(|e| AppError::Payload(format!("Failed to create FormData: {:?}", e)))?;

    for (name, part) in payload.parts() {
        match part {
            Part::File(file) => form_data.append_with_blob_and_filename(name, file, &file.name()),
            Part::Text(value) => form_data.append_with_str(name, value),
        }
        .map_err(|e| AppError::Payload(format!("Failed to append '{}': {:?}", name, e)))?;
    }

    Ok(form_data)
}

/// Decide the outcome of a completed request.
///
/// Checked in order: duplicate (409 with `duplicate`, video only), then
/// failure (non-2xx or `ok` falsy), then success.
pub fn interpret_response(kind: UploadKind, status: u16, body: &ResponseBody) -> UploadOutcome {
    if status == 409 && body.flag("duplicate") && kind.reports_duplicates() {
        return UploadOutcome::Duplicate;
    }

    if !(200..300).contains(&status) || !body.flag("ok") {
        let message = body
            .message()
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        return UploadOutcome::Failure(message);
    }

    UploadOutcome::Success
}
