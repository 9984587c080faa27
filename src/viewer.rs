//! Viewer-side OCR flow for one captured image.
//!
//! The host owns the viewer window; this flow owns the captured image, the
//! viewer state machine, and the execution of its effects: spawning
//! recognition jobs, copying the image, and closing. Recognition completions
//! come back through a channel so a viewer that is already gone simply drops
//! them.

use std::sync::Arc;

use image::RgbaImage;
use snip_app::viewer::{self, Action, Effect};
use snip_ocr::{OcrOrchestrator, RecognitionBackend, RecognitionOutcome};
use snip_platform::{Clipboard, KeyCode, Modifiers, Notifier, ResultSink, ViewerControls};
use snip_settings::Settings;
use tokio::sync::mpsc;
use tracing::warn;

/// Build the recognition orchestrator from the persisted preferences.
///
/// The language preference order comes from `Settings.ocr_languages`, so a
/// user with only a regional language pack can reorder or replace the
/// defaults.
pub fn orchestrator_from_settings(
    settings: &Settings,
    backend: Arc<dyn RecognitionBackend>,
    clipboard: Arc<dyn Clipboard>,
    results: Arc<dyn ResultSink>,
    notifier: Arc<dyn Notifier>,
    controls: Arc<dyn ViewerControls>,
) -> OcrOrchestrator {
    OcrOrchestrator::new(backend, clipboard, results, notifier, controls)
        .with_language_preference(settings.ocr_languages.clone())
}

pub struct ViewerFlow {
    image: Arc<RgbaImage>,
    model: viewer::Model,
    orchestrator: Arc<OcrOrchestrator>,
    clipboard: Arc<dyn Clipboard>,
    runtime: tokio::runtime::Handle,
    completion_tx: mpsc::UnboundedSender<RecognitionOutcome>,
    closed: bool,
}

impl ViewerFlow {
    /// Create the flow for a freshly captured image.
    ///
    /// The returned receiver yields recognition outcomes; the host forwards
    /// each one back via [`ViewerFlow::ocr_finished`]. Dropping the receiver
    /// is safe: late results are discarded.
    pub fn new(
        image: RgbaImage,
        auto_ocr: bool,
        orchestrator: Arc<OcrOrchestrator>,
        clipboard: Arc<dyn Clipboard>,
        runtime: tokio::runtime::Handle,
    ) -> (Self, mpsc::UnboundedReceiver<RecognitionOutcome>) {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let flow = Self {
            image: Arc::new(image),
            model: viewer::Model::new(auto_ocr),
            orchestrator,
            clipboard,
            runtime,
            completion_tx,
            closed: false,
        };
        (flow, completion_rx)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_ocr_running(&self) -> bool {
        self.model.is_ocr_running()
    }

    /// The viewer window became visible for the first time.
    pub fn opened(&mut self) {
        self.dispatch(Action::Opened);
    }

    /// The viewer window regained focus.
    pub fn focus_gained(&mut self) {
        self.dispatch(Action::FocusGained);
    }

    /// Manual text extraction (menu item).
    pub fn extract_text(&mut self) {
        self.dispatch(Action::ExtractText);
    }

    /// Copy the captured image to the clipboard (menu item).
    pub fn copy_image(&mut self) {
        self.dispatch(Action::CopyImage);
    }

    /// Close the viewer (menu item).
    pub fn close(&mut self) {
        self.dispatch(Action::Close);
    }

    /// A recognition outcome arrived on the completion channel.
    pub fn ocr_finished(&mut self) {
        self.dispatch(Action::OcrFinished);
    }

    /// Viewer keyboard shortcuts.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: Modifiers) {
        match key {
            KeyCode::C if modifiers.ctrl => self.copy_image(),
            KeyCode::T if modifiers.ctrl => self.extract_text(),
            KeyCode::ESCAPE => self.close(),
            _ => {}
        }
    }

    fn dispatch(&mut self, action: Action) {
        for effect in self.model.reduce(action) {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::RunOcr { mode } => {
                let orchestrator = Arc::clone(&self.orchestrator);
                let image = Arc::clone(&self.image);
                let tx = self.completion_tx.clone();
                self.runtime.spawn(async move {
                    let outcome = orchestrator.recognize(&image, mode).await;
                    // The viewer may be gone by now; a closed receiver just
                    // drops the result.
                    let _ = tx.send(outcome);
                });
            }

            Effect::CopyImageToClipboard => {
                if let Err(error) = self.clipboard.set_image(&self.image) {
                    warn!(%error, "failed to copy image to clipboard");
                }
            }

            Effect::CloseViewer => {
                self.closed = true;
            }
        }
    }
}
