/// How recognized text is handed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Show the text in the result window.
    Visible,
    /// Put non-empty text on the clipboard without any UI.
    Silent,
}

/// OCR job phase for one viewer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrPhase {
    #[default]
    Idle,
    /// A recognition job has been started and is expected to complete
    /// asynchronously.
    Running,
}

/// Viewer input actions (pure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The viewer window was opened and is visible for the first time.
    Opened,
    /// The viewer window regained focus.
    FocusGained,
    /// User requested text extraction (menu item or Ctrl+T).
    ExtractText,
    /// The recognition job finished (any outcome).
    OcrFinished,
    /// User requested copying the captured image (menu item or Ctrl+C).
    CopyImage,
    /// User requested closing the viewer (menu item or Escape).
    Close,
}

/// Effects requested by the viewer model (executed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start an asynchronous recognition job over the captured image.
    RunOcr { mode: DeliveryMode },
    /// Copy the captured image to the system clipboard.
    CopyImageToClipboard,
    /// Close the viewer window.
    CloseViewer,
}

/// Viewer state machine.
///
/// Owns the auto-OCR-once rule and the single-in-flight recognition rule.
/// While a job is running, `ExtractText` is ignored (the host additionally
/// disables the trigger control for the job's duration).
#[derive(Debug)]
pub struct Model {
    phase: OcrPhase,
    auto_ocr: bool,
    auto_ran: bool,
}

impl Model {
    pub fn new(auto_ocr: bool) -> Self {
        Self {
            phase: OcrPhase::Idle,
            auto_ocr,
            auto_ran: false,
        }
    }

    pub fn phase(&self) -> OcrPhase {
        self.phase
    }

    pub fn is_ocr_running(&self) -> bool {
        self.phase == OcrPhase::Running
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Opened => {
                // Auto-OCR fires exactly once per viewer instance and uses
                // silent delivery; it never repeats on later focus changes.
                if self.auto_ocr && !self.auto_ran && self.phase == OcrPhase::Idle {
                    self.auto_ran = true;
                    self.phase = OcrPhase::Running;
                    return vec![Effect::RunOcr {
                        mode: DeliveryMode::Silent,
                    }];
                }
                Vec::new()
            }

            Action::FocusGained => Vec::new(),

            Action::ExtractText => {
                // Ignore re-entrant requests while a job is already running.
                if self.is_ocr_running() {
                    return Vec::new();
                }

                self.phase = OcrPhase::Running;
                vec![Effect::RunOcr {
                    mode: DeliveryMode::Visible,
                }]
            }

            Action::OcrFinished => {
                self.phase = OcrPhase::Idle;
                Vec::new()
            }

            Action::CopyImage => vec![Effect::CopyImageToClipboard],

            Action::Close => vec![Effect::CloseViewer],
        }
    }
}
