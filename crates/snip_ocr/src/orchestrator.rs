use std::sync::Arc;

use image::RgbaImage;
use snip_app::viewer::DeliveryMode;
use snip_platform::{Clipboard, Notifier, ResultSink, ViewerControls};
use tracing::{debug, warn};

use crate::engine::RecognitionBackend;
use crate::language::{default_preference, select_language};
use crate::preprocess;
use crate::types::RecognitionOutcome;

/// Scoped "invocation in progress" marker.
///
/// Disables the trigger control and shows the wait cursor on acquisition;
/// restores both when dropped, so cleanup happens on every exit path.
pub struct BusyGuard {
    controls: Arc<dyn ViewerControls>,
}

impl BusyGuard {
    pub fn acquire(controls: Arc<dyn ViewerControls>) -> Self {
        controls.set_busy(true);
        Self { controls }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.controls.set_busy(false);
    }
}

/// Runs the full recognition pipeline for one captured image: language
/// selection, engine creation, preprocessing, recognition, and delivery.
///
/// Invocations are fire-and-forget; the caller spawns `recognize` on the
/// runtime and enforces at most one in flight per viewer (the viewer model
/// ignores re-entrant triggers and the trigger control is disabled for the
/// invocation's duration).
pub struct OcrOrchestrator {
    backend: Arc<dyn RecognitionBackend>,
    clipboard: Arc<dyn Clipboard>,
    results: Arc<dyn ResultSink>,
    notifier: Arc<dyn Notifier>,
    controls: Arc<dyn ViewerControls>,
    language_preference: Vec<String>,
}

impl OcrOrchestrator {
    pub fn new(
        backend: Arc<dyn RecognitionBackend>,
        clipboard: Arc<dyn Clipboard>,
        results: Arc<dyn ResultSink>,
        notifier: Arc<dyn Notifier>,
        controls: Arc<dyn ViewerControls>,
    ) -> Self {
        Self {
            backend,
            clipboard,
            results,
            notifier,
            controls,
            language_preference: default_preference(),
        }
    }

    /// Override the language preference order (defaults to `["ja", "en"]`).
    pub fn with_language_preference(mut self, preference: Vec<String>) -> Self {
        self.language_preference = preference;
        self
    }

    /// Run recognition over `image` and deliver the result per `mode`.
    ///
    /// Never blocks the caller beyond awaiting; errors are folded into the
    /// outcome, surfaced to the user only for `Visible` invocations, and
    /// never retried.
    pub async fn recognize(&self, image: &RgbaImage, mode: DeliveryMode) -> RecognitionOutcome {
        let _busy = BusyGuard::acquire(Arc::clone(&self.controls));

        let outcome = self.run(image, mode).await;

        if let Some(message) = outcome.error_message() {
            match mode {
                DeliveryMode::Visible => self.notifier.notify_error(&message),
                // Silent invocations degrade invisibly to "no clipboard
                // update".
                DeliveryMode::Silent => warn!(%message, "silent recognition failed"),
            }
        }

        outcome
    }

    async fn run(&self, image: &RgbaImage, mode: DeliveryMode) -> RecognitionOutcome {
        let available = self.backend.available_languages();
        let Some(language) = select_language(&available, &self.language_preference) else {
            return RecognitionOutcome::NoLanguageAvailable;
        };
        debug!(language, "selected recognition language");

        let engine = match self.backend.create_engine(language) {
            Ok(engine) => engine,
            Err(error) => {
                warn!(language, %error, "engine creation failed");
                return RecognitionOutcome::EngineUnavailable;
            }
        };

        let enhanced = preprocess::enhance(image);
        debug!(
            width = enhanced.width(),
            height = enhanced.height(),
            "image preprocessed for recognition"
        );

        let text = match engine.recognize(&enhanced).await {
            Ok(text) => text,
            Err(error) => return RecognitionOutcome::Failure(format!("{error:#}")),
        };

        if let Err(error) = self.deliver(&text, mode) {
            return RecognitionOutcome::Failure(format!("{error:#}"));
        }

        RecognitionOutcome::Success(text)
    }

    fn deliver(&self, text: &str, mode: DeliveryMode) -> anyhow::Result<()> {
        match mode {
            DeliveryMode::Visible => {
                self.results.show_result(text);
                Ok(())
            }
            DeliveryMode::Silent => {
                // Empty text is a silent no-op, not an error.
                if text.is_empty() {
                    debug!("empty recognition result, skipping clipboard");
                    return Ok(());
                }
                self.clipboard.set_text(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use snip_platform::Clipboard;

    use super::*;
    use crate::engine::RecognitionEngine;

    struct FakeEngine {
        text: Result<String, String>,
    }

    #[async_trait]
    impl RecognitionEngine for FakeEngine {
        async fn recognize(&self, _image: &RgbaImage) -> Result<String> {
            self.text.clone().map_err(|e| anyhow!(e))
        }
    }

    struct FakeBackend {
        languages: Vec<String>,
        engine_error: Option<String>,
        text: Result<String, String>,
    }

    impl FakeBackend {
        fn with_text(text: &str) -> Self {
            Self {
                languages: vec!["ja".to_string(), "en".to_string()],
                engine_error: None,
                text: Ok(text.to_string()),
            }
        }
    }

    impl RecognitionBackend for FakeBackend {
        fn available_languages(&self) -> Vec<String> {
            self.languages.clone()
        }

        fn create_engine(&self, _language: &str) -> Result<Box<dyn RecognitionEngine>> {
            if let Some(message) = &self.engine_error {
                return Err(anyhow!(message.clone()));
            }
            Ok(Box::new(FakeEngine {
                text: self.text.clone(),
            }))
        }
    }

    #[derive(Default)]
    struct Recording {
        clipboard: Mutex<Vec<String>>,
        results: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
        busy: Mutex<Vec<bool>>,
    }

    impl Clipboard for Recording {
        fn set_text(&self, text: &str) -> Result<()> {
            self.clipboard.lock().unwrap().push(text.to_string());
            Ok(())
        }
        fn set_image(&self, _image: &RgbaImage) -> Result<()> {
            Ok(())
        }
    }

    impl ResultSink for Recording {
        fn show_result(&self, text: &str) {
            self.results.lock().unwrap().push(text.to_string());
        }
    }

    impl Notifier for Recording {
        fn notify_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    impl ViewerControls for Recording {
        fn set_busy(&self, busy: bool) {
            self.busy.lock().unwrap().push(busy);
        }
    }

    fn orchestrator(backend: FakeBackend) -> (OcrOrchestrator, Arc<Recording>) {
        let recording = Arc::new(Recording::default());
        let orchestrator = OcrOrchestrator::new(
            Arc::new(backend),
            Arc::clone(&recording) as Arc<dyn Clipboard>,
            Arc::clone(&recording) as Arc<dyn ResultSink>,
            Arc::clone(&recording) as Arc<dyn Notifier>,
            Arc::clone(&recording) as Arc<dyn ViewerControls>,
        );
        (orchestrator, recording)
    }

    fn test_image() -> RgbaImage {
        RgbaImage::from_pixel(8, 8, image::Rgba([255, 255, 255, 255]))
    }

    #[tokio::test]
    async fn empty_language_set_yields_no_language_available() {
        let (orchestrator, recording) = orchestrator(FakeBackend {
            languages: Vec::new(),
            engine_error: None,
            text: Ok("unused".to_string()),
        });

        let outcome = orchestrator
            .recognize(&test_image(), DeliveryMode::Visible)
            .await;

        assert_eq!(outcome, RecognitionOutcome::NoLanguageAvailable);
        // Visible mode surfaces the error exactly once.
        assert_eq!(recording.errors.lock().unwrap().len(), 1);
        assert!(recording.clipboard.lock().unwrap().is_empty());
        assert!(recording.results.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn engine_creation_failure_yields_engine_unavailable() {
        let (orchestrator, recording) = orchestrator(FakeBackend {
            languages: vec!["en".to_string()],
            engine_error: Some("init failed".to_string()),
            text: Ok("unused".to_string()),
        });

        let outcome = orchestrator
            .recognize(&test_image(), DeliveryMode::Visible)
            .await;

        assert_eq!(outcome, RecognitionOutcome::EngineUnavailable);
        assert_eq!(recording.errors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn visible_success_goes_to_the_result_sink() {
        let (orchestrator, recording) = orchestrator(FakeBackend::with_text("hello"));

        let outcome = orchestrator
            .recognize(&test_image(), DeliveryMode::Visible)
            .await;

        assert_eq!(outcome, RecognitionOutcome::Success("hello".to_string()));
        assert_eq!(
            *recording.results.lock().unwrap(),
            vec!["hello".to_string()]
        );
        assert!(recording.clipboard.lock().unwrap().is_empty());
        assert!(recording.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn silent_success_writes_clipboard_exactly_once() {
        let (orchestrator, recording) = orchestrator(FakeBackend::with_text("copied"));

        let outcome = orchestrator
            .recognize(&test_image(), DeliveryMode::Silent)
            .await;

        assert_eq!(outcome, RecognitionOutcome::Success("copied".to_string()));
        assert_eq!(
            *recording.clipboard.lock().unwrap(),
            vec!["copied".to_string()]
        );
        assert!(recording.results.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn silent_empty_text_never_touches_the_clipboard() {
        let (orchestrator, recording) = orchestrator(FakeBackend::with_text(""));

        let outcome = orchestrator
            .recognize(&test_image(), DeliveryMode::Silent)
            .await;

        assert_eq!(outcome, RecognitionOutcome::Success(String::new()));
        assert!(recording.clipboard.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn recognition_error_is_a_failure_and_silent_mode_suppresses_it() {
        let (orchestrator, recording) = orchestrator(FakeBackend {
            languages: vec!["ja".to_string()],
            engine_error: None,
            text: Err("model crashed".to_string()),
        });

        let outcome = orchestrator
            .recognize(&test_image(), DeliveryMode::Silent)
            .await;

        assert!(matches!(outcome, RecognitionOutcome::Failure(_)));
        // Silent failures degrade invisibly: no dialog, no clipboard update.
        assert!(recording.errors.lock().unwrap().is_empty());
        assert!(recording.clipboard.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn busy_state_is_restored_on_every_outcome() {
        for backend in [
            FakeBackend::with_text("ok"),
            FakeBackend {
                languages: Vec::new(),
                engine_error: None,
                text: Ok(String::new()),
            },
            FakeBackend {
                languages: vec!["en".to_string()],
                engine_error: Some("nope".to_string()),
                text: Ok(String::new()),
            },
            FakeBackend {
                languages: vec!["en".to_string()],
                engine_error: None,
                text: Err("boom".to_string()),
            },
        ] {
            let (orchestrator, recording) = orchestrator(backend);
            let _ = orchestrator
                .recognize(&test_image(), DeliveryMode::Visible)
                .await;

            let busy = recording.busy.lock().unwrap();
            assert_eq!(*busy, vec![true, false]);
        }
    }
}
