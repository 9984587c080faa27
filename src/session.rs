//! One capture session: snapshot, region selection, crop.
//!
//! The host owns the overlay window and routes raw input events here; the
//! session drives the selection state machine and produces the cropped
//! image on commit. The snapshot taken at session start stays authoritative
//! for the whole session (display changes are not re-captured).

use std::time::Duration;

use image::{RgbaImage, imageops};
use snip_app::selection::{self, RectI32};
use snip_platform::{InputEvent, KeyCode, MouseButton, ScreenCapture};
use snip_rendering::RenderList;
use snip_settings::Settings;
use snip_ui::build_selection_overlay_render_list;
use tracing::{debug, info};

use crate::error::AppError;

/// Terminal result of a selection session.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A valid region was selected; holds the cropped image.
    Committed(RgbaImage),
    /// The session ended without a capture.
    Cancelled,
}

/// What the host should do after feeding one event.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    /// Repaint the overlay.
    pub needs_redraw: bool,
    /// The session reached a terminal state; tear the overlay down.
    pub outcome: Option<SessionOutcome>,
}

/// Interactive region-selection session over a frozen screen snapshot.
pub struct SelectionSession {
    snapshot: RgbaImage,
    model: selection::Model,
}

impl SelectionSession {
    /// Capture the primary display and start a session over it.
    pub fn start(capture: &dyn ScreenCapture) -> Result<Self, AppError> {
        let snapshot = capture
            .capture()
            .map_err(|error| AppError::Capture(format!("{error:#}")))?;

        info!(
            width = snapshot.width(),
            height = snapshot.height(),
            "selection session started"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Start a session over an existing snapshot.
    pub fn from_snapshot(snapshot: RgbaImage) -> Self {
        Self {
            snapshot,
            model: selection::Model::new(),
        }
    }

    pub fn snapshot(&self) -> &RgbaImage {
        &self.snapshot
    }

    /// Current drag rectangle, if any.
    pub fn selection(&self) -> Option<RectI32> {
        self.model.selection()
    }

    /// Build the overlay render list for the current state.
    ///
    /// `None` means the host should show only the base dim veil over the
    /// snapshot.
    pub fn overlay_render_list(&self) -> Option<RenderList> {
        let screen = (self.snapshot.width() as i32, self.snapshot.height() as i32);
        build_selection_overlay_render_list(screen, self.selection())
    }

    /// Feed one input event into the session.
    pub fn handle_event(&mut self, event: InputEvent) -> SessionUpdate {
        let Some(action) = action_for(event) else {
            return SessionUpdate::default();
        };

        let mut update = SessionUpdate::default();
        for effect in self.model.reduce(action) {
            match effect {
                selection::Effect::RequestRedraw => update.needs_redraw = true,
                selection::Effect::Commit { rect } => {
                    update.outcome = Some(match self.crop(rect) {
                        Some(image) => SessionOutcome::Committed(image),
                        // Selection fell entirely outside the snapshot.
                        None => SessionOutcome::Cancelled,
                    });
                }
                selection::Effect::Cancel => {
                    update.outcome = Some(SessionOutcome::Cancelled);
                }
            }
        }
        update
    }

    fn crop(&self, rect: RectI32) -> Option<RgbaImage> {
        let (width, height) = (self.snapshot.width() as i32, self.snapshot.height() as i32);

        let left = rect.left.clamp(0, width);
        let top = rect.top.clamp(0, height);
        let right = rect.right.clamp(0, width);
        let bottom = rect.bottom.clamp(0, height);
        if right <= left || bottom <= top {
            return None;
        }

        debug!(left, top, right, bottom, "cropping committed selection");
        let view = imageops::crop_imm(
            &self.snapshot,
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        );
        Some(view.to_image())
    }
}

fn action_for(event: InputEvent) -> Option<selection::Action> {
    match event {
        InputEvent::MouseDown {
            x,
            y,
            button: MouseButton::Left,
        } => Some(selection::Action::PointerDown { x, y }),
        InputEvent::MouseMove { x, y } => Some(selection::Action::PointerMove { x, y }),
        InputEvent::MouseUp {
            x,
            y,
            button: MouseButton::Left,
        } => Some(selection::Action::PointerUp { x, y }),
        InputEvent::KeyDown {
            key: KeyCode::ESCAPE,
            ..
        } => Some(selection::Action::CancelKey),
        _ => None,
    }
}

/// Caller-side blocking wait before the snapshot is taken.
///
/// With the delay preference set the user gets time to arrange windows;
/// otherwise a short pause lets the invoking window finish hiding.
pub fn capture_delay(settings: &Settings) -> Duration {
    if settings.delay_capture {
        Duration::from_millis(settings.delay_ms as u64)
    } else {
        Duration::from_millis(200)
    }
}

/// Sleep for the configured pre-capture delay.
pub fn wait_before_capture(settings: &Settings) {
    std::thread::sleep(capture_delay(settings));
}
