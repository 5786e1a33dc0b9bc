//! Upload submission flow shared by the video and ZIP forms.
//!
//! ```text
//! Idle → Validating → Submitting → Settled(Success | Duplicate | Failure) → Idle
//! ```
//!
//! Validation is pure and runs before anything touches the network. The
//! busy state is held by a [`BusyGuard`] for the duration of the request.

use crate::config::DEFAULT_PROVIDER;
use crate::services::upload::{
    interpret_response, MultipartPayload, SelectedFile, UploadRequest, UploadTransport,
};
use crate::state::{BusyGuard, BusyTarget, NoticeLevel, NoticeState};
use crate::types::{AppResult, ResponseBody, SourceType, UploadKind, UploadOutcome, ValidationError};

/// Raw values of the video form.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoForm<F> {
    pub file: Option<F>,
    pub source_type: String,
    pub provider: String,
}

impl<F> VideoForm<F> {
    pub fn validate(self) -> Result<UploadRequest<F>, ValidationError> {
        let kind = UploadKind::Video;
        let file = self.file.ok_or(ValidationError::MissingVideo)?;
        let source_type: SourceType = self.source_type.parse()?;

        let provider = if self.provider.trim().is_empty() {
            DEFAULT_PROVIDER.to_string()
        } else {
            self.provider
        };

        Ok(UploadRequest {
            kind,
            payload: MultipartPayload::new()
                .with_file(kind.file_field(), file)
                .with_text("source_type", source_type.as_str())
                .with_text("provider", provider),
        })
    }
}

/// Raw values of the image ZIP form.
#[derive(Clone, Debug, PartialEq)]
pub struct ZipForm<F> {
    pub file: Option<F>,
    pub source_type: String,
    pub dataset_name: String,
}

impl<F: SelectedFile> ZipForm<F> {
    pub fn validate(self) -> Result<UploadRequest<F>, ValidationError> {
        let kind = UploadKind::Zip;
        let file = self.file.ok_or(ValidationError::MissingZip)?;

        if !file.file_name().to_lowercase().ends_with(".zip") {
            return Err(ValidationError::NotZip);
        }

        let dataset_name = self.dataset_name.trim();
        if dataset_name.is_empty() {
            return Err(ValidationError::MissingDatasetName);
        }

        let source_type: SourceType = self.source_type.parse()?;

        Ok(UploadRequest {
            kind,
            payload: MultipartPayload::new()
                .with_file(kind.file_field(), file)
                .with_text("source_type", source_type.as_str())
                .with_text("dataset_name", dataset_name),
        })
    }
}

/// A submitted form of either kind.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadForm<F> {
    Video(VideoForm<F>),
    Zip(ZipForm<F>),
}

impl<F: SelectedFile> UploadForm<F> {
    pub fn kind(&self) -> UploadKind {
        match self {
            UploadForm::Video(_) => UploadKind::Video,
            UploadForm::Zip(_) => UploadKind::Zip,
        }
    }

    pub fn validate(self) -> Result<UploadRequest<F>, ValidationError> {
        match self {
            UploadForm::Video(form) => form.validate(),
            UploadForm::Zip(form) => form.validate(),
        }
    }
}

/// What the page should show once a submission has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub outcome: UploadOutcome,
    pub notice: NoticeState,
    /// Clear the form's fields (success only)
    pub reset_form: bool,
}

impl Settled {
    pub fn new(kind: UploadKind, outcome: UploadOutcome) -> Self {
        let (notice, reset_form) = match &outcome {
            UploadOutcome::Success => (
                NoticeState::shown(NoticeLevel::Ok, "Subido", kind.success_message()),
                true,
            ),
            UploadOutcome::Duplicate => (
                NoticeState::shown(
                    NoticeLevel::Warn,
                    "Duplicado",
                    "Este vídeo ya existe. No se ha subido.",
                ),
                false,
            ),
            UploadOutcome::Failure(message) => {
                (NoticeState::shown(NoticeLevel::Err, "Error", message.as_str()), false)
            }
        };

        Self {
            outcome,
            notice,
            reset_form,
        }
    }
}

/// Run one submission from validation to settled state.
///
/// `busy` is only engaged once validation passes and is released before this
/// returns, whatever the outcome.
pub async fn run_submission<T, B>(form: UploadForm<T::File>, transport: &T, busy: B) -> Settled
where
    T: UploadTransport,
    T::File: SelectedFile,
    B: BusyTarget,
{
    let kind = form.kind();

    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            log::warn!("⚠️ {} upload rejected before sending: {}", kind, err);
            return Settled::new(kind, UploadOutcome::Failure(err.to_string()));
        }
    };

    let outcome = {
        let _busy = BusyGuard::engage(busy, kind.busy_text());

        match send(transport, &request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("❌ {} upload did not complete: {:?}", kind, err);
                UploadOutcome::Failure(err.to_string())
            }
        }
    };

    match &outcome {
        UploadOutcome::Success => log::info!("✅ {} upload accepted", kind),
        UploadOutcome::Duplicate => log::warn!("♻️ {} upload is a duplicate", kind),
        UploadOutcome::Failure(message) => log::error!("❌ {} upload failed: {}", kind, message),
    }

    Settled::new(kind, outcome)
}

async fn send<T: UploadTransport>(
    transport: &T,
    request: &UploadRequest<T::File>,
) -> AppResult<UploadOutcome> {
    log::info!("📤 Uploading {} to {}", request.kind, request.kind.endpoint());

    let response = transport.post(request.kind.endpoint(), &request.payload).await?;
    let body = ResponseBody::parse(&response.body);

    Ok(interpret_response(request.kind, response.status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::upload::RawResponse;
    use crate::state::BusyState;
    use crate::types::AppError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl SelectedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    struct FakeTransport {
        response: AppResult<RawResponse>,
        calls: RefCell<Vec<(String, MultipartPayload<FakeFile>)>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                response: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(AppError::Network(message.to_string())),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl UploadTransport for FakeTransport {
        type File = FakeFile;

        async fn post(
            &self,
            endpoint: &str,
            payload: &MultipartPayload<FakeFile>,
        ) -> AppResult<RawResponse> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), payload.clone()));
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct BusyRecorder(RefCell<Vec<BusyState>>);

    impl BusyTarget for BusyRecorder {
        fn set_busy(&self, state: BusyState) {
            self.0.borrow_mut().push(state);
        }
    }

    impl BusyRecorder {
        fn states(&self) -> Vec<BusyState> {
            self.0.borrow().clone()
        }

        /// Not submitting, and every engage was matched by one release.
        fn assert_released(&self) {
            let states = self.states();
            let engaged = states.iter().filter(|s| s.submitting).count();
            let released = states.iter().filter(|s| !s.submitting).count();
            assert_eq!(engaged, released);
            assert!(states.last().map_or(true, |s| !s.submitting));
        }
    }

    fn video(file: Option<&'static str>, provider: &str) -> UploadForm<FakeFile> {
        UploadForm::Video(VideoForm {
            file: file.map(FakeFile),
            source_type: "captured".to_string(),
            provider: provider.to_string(),
        })
    }

    fn zip(file: Option<&'static str>, dataset_name: &str) -> UploadForm<FakeFile> {
        UploadForm::Zip(ZipForm {
            file: file.map(FakeFile),
            source_type: "public".to_string(),
            dataset_name: dataset_name.to_string(),
        })
    }

    fn run(form: UploadForm<FakeFile>, transport: &FakeTransport, busy: &BusyRecorder) -> Settled {
        block_on(run_submission(form, transport, busy))
    }

    #[test]
    fn test_video_without_file_sends_nothing() {
        let transport = FakeTransport::replying(200, r#"{"ok": true}"#);
        let busy = BusyRecorder::default();

        let settled = run(video(None, "acme"), &transport, &busy);

        assert_eq!(settled.outcome, UploadOutcome::Failure("Selecciona un vídeo.".to_string()));
        assert_eq!(settled.notice.level, NoticeLevel::Err);
        assert!(settled.notice.visible);
        assert!(!settled.reset_form);
        assert!(transport.calls.borrow().is_empty());
        assert!(busy.states().is_empty());
    }

    #[test]
    fn test_zip_wrong_extension_sends_nothing() {
        let transport = FakeTransport::replying(200, r#"{"ok": true}"#);
        let busy = BusyRecorder::default();

        let settled = run(zip(Some("photo.png"), "street"), &transport, &busy);

        match &settled.outcome {
            UploadOutcome::Failure(message) => assert!(message.contains(".zip")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(settled.notice.level, NoticeLevel::Err);
        assert!(transport.calls.borrow().is_empty());
        assert!(busy.states().is_empty());
    }

    #[test]
    fn test_zip_blank_dataset_sends_nothing() {
        let transport = FakeTransport::replying(200, r#"{"ok": true}"#);
        let busy = BusyRecorder::default();

        let settled = run(zip(Some("frames.zip"), "   "), &transport, &busy);

        assert_eq!(
            settled.outcome,
            UploadOutcome::Failure(ValidationError::MissingDatasetName.to_string())
        );
        assert!(transport.calls.borrow().is_empty());
        assert!(busy.states().is_empty());
    }

    #[test]
    fn test_zip_missing_file() {
        let result = ZipForm::<FakeFile> {
            file: None,
            source_type: "public".to_string(),
            dataset_name: "x".to_string(),
        }
        .validate();
        assert_eq!(result, Err(ValidationError::MissingZip));
    }

    #[test]
    fn test_invalid_source_type_rejected() {
        let form = VideoForm {
            file: Some(FakeFile("clip.mp4")),
            source_type: "drone".to_string(),
            provider: String::new(),
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidSourceType("drone".to_string()))
        );
    }

    #[test]
    fn test_zip_extension_case_insensitive() {
        let request = ZipForm {
            file: Some(FakeFile("FRAMES.ZIP")),
            source_type: "simulated".to_string(),
            dataset_name: "  night run  ".to_string(),
        }
        .validate()
        .unwrap();

        assert_eq!(request.kind, UploadKind::Zip);
        assert_eq!(request.payload.file("zipfile"), Some(&FakeFile("FRAMES.ZIP")));
        assert_eq!(request.payload.text("source_type"), Some("simulated"));
        assert_eq!(request.payload.text("dataset_name"), Some("night run"));
    }

    #[test]
    fn test_video_payload_defaults_provider() {
        let request = VideoForm {
            file: Some(FakeFile("clip.mp4")),
            source_type: "public".to_string(),
            provider: "  ".to_string(),
        }
        .validate()
        .unwrap();

        let names: Vec<&str> = request.payload.parts().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["video", "source_type", "provider"]);
        assert_eq!(request.payload.text("provider"), Some("unknown"));
    }

    #[test]
    fn test_duplicate_keeps_form() {
        let transport = FakeTransport::replying(409, r#"{"duplicate": true}"#);
        let busy = BusyRecorder::default();

        let settled = run(video(Some("clip.mp4"), "acme"), &transport, &busy);

        assert_eq!(settled.outcome, UploadOutcome::Duplicate);
        assert_eq!(settled.notice.level, NoticeLevel::Warn);
        assert!(!settled.reset_form);
        busy.assert_released();
    }

    #[test]
    fn test_success_resets_form() {
        let transport = FakeTransport::replying(200, r#"{"ok": true}"#);
        let busy = BusyRecorder::default();

        let settled = run(video(Some("clip.mp4"), "acme"), &transport, &busy);

        assert_eq!(settled.outcome, UploadOutcome::Success);
        assert_eq!(
            settled.notice,
            NoticeState::shown(NoticeLevel::Ok, "Subido", UploadKind::Video.success_message())
        );
        assert!(settled.reset_form);

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/api/upload-video");
        assert_eq!(calls[0].1.text("provider"), Some("acme"));

        assert_eq!(
            busy.states(),
            vec![BusyState::submitting(UploadKind::Video.busy_text()), BusyState::idle()]
        );
    }

    #[test]
    fn test_zip_success_posts_to_zip_endpoint() {
        let transport = FakeTransport::replying(200, r#"{"ok": true}"#);
        let busy = BusyRecorder::default();

        let settled = run(zip(Some("frames.zip"), "street"), &transport, &busy);

        assert!(settled.reset_form);
        assert_eq!(transport.calls.borrow()[0].0, "/api/upload-images-zip");
        busy.assert_released();
    }

    #[test]
    fn test_server_failure_message() {
        let transport = FakeTransport::replying(500, r#"{"ok": false, "message": "disk full"}"#);
        let busy = BusyRecorder::default();

        let settled = run(zip(Some("frames.zip"), "street"), &transport, &busy);

        assert_eq!(settled.outcome, UploadOutcome::Failure("disk full".to_string()));
        assert_eq!(settled.notice.body, "disk full");
        assert!(!settled.reset_form);
        busy.assert_released();
    }

    #[test]
    fn test_network_error_becomes_failure() {
        let transport = FakeTransport::failing("Failed to fetch");
        let busy = BusyRecorder::default();

        let settled = run(video(Some("clip.mp4"), ""), &transport, &busy);

        assert_eq!(settled.outcome, UploadOutcome::Failure("Failed to fetch".to_string()));
        assert_eq!(settled.notice.level, NoticeLevel::Err);
        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(busy.states().len(), 2);
        busy.assert_released();
    }
}
