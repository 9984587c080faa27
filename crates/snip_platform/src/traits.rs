use anyhow::Result;
use image::RgbaImage;

/// Capture the primary display's full bounds into a pixel buffer.
///
/// Capability absence is a fatal startup condition for the host, not a
/// runtime error the capture session is expected to recover from.
pub trait ScreenCapture {
    fn capture(&self) -> Result<RgbaImage>;
}

/// System clipboard access.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
    fn set_image(&self, image: &RgbaImage) -> Result<()>;
}

/// Collaborator that displays recognized text to the user.
///
/// Opens a read/write text view; there is no contract on further
/// interaction.
pub trait ResultSink: Send + Sync {
    fn show_result(&self, text: &str);
}

/// One-shot user-visible error notification.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Viewer-side controls toggled while a recognition job is in flight:
/// the trigger control's enabled state and the wait cursor.
pub trait ViewerControls: Send + Sync {
    fn set_busy(&self, busy: bool);
}

/// No-op controls for hosts without a trigger control to manage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullViewerControls;

impl ViewerControls for NullViewerControls {
    fn set_busy(&self, _busy: bool) {}
}
