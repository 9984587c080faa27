/// Platform-neutral integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Construct a normalized rectangle from two points.
    ///
    /// The result always has non-negative width and height regardless of the
    /// drag direction: `left = min(x1, x2)`, `right = max(x1, x2)`, and
    /// symmetrically for the vertical axis.
    #[inline]
    pub fn from_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    /// True if both width and height strictly exceed `min_size`.
    #[inline]
    pub fn exceeds_min_size(&self, min_size: i32) -> bool {
        self.width() > min_size && self.height() > min_size
    }
}

/// Minimum selection size (in pixels).
///
/// A drag release commits only when both dimensions strictly exceed this
/// value; anything smaller is treated as an accidental click and cancels the
/// session. Centralized here so host-side selection handling cannot drift.
pub const MIN_SELECTION_SIZE: i32 = 5;

/// Selection session phase.
///
/// `Committed` and `Cancelled` are terminal: once reached, further input is
/// ignored and the session owner is expected to tear the overlay down.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// The primary button is held and the selection rectangle follows the
    /// pointer.
    Dragging { anchor: (i32, i32), rect: RectI32 },
    /// A valid region was selected.
    Committed { rect: RectI32 },
    /// The session ended without producing a region.
    Cancelled,
}

/// Input actions (pure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary pointer button pressed.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved (only meaningful while dragging).
    PointerMove { x: i32, y: i32 },
    /// Primary pointer button released.
    PointerUp { x: i32, y: i32 },
    /// Cancel key (Escape) pressed. A hard cancel from any non-terminal
    /// state, independent of pointer state.
    CancelKey,
}

/// Effects requested by the core (executed by the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The overlay needs repainting. Emitted on state change only; the host
    /// must not repaint on its own schedule.
    RequestRedraw,
    /// A valid selection was committed. The host crops the session snapshot
    /// to this rectangle.
    Commit { rect: RectI32 },
    /// The session was cancelled without a selection.
    Cancel,
}

/// Region-selection state machine.
#[derive(Debug, Default)]
pub struct Model {
    phase: Phase,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current drag rectangle, if a drag is in progress.
    pub fn selection(&self) -> Option<RectI32> {
        match &self.phase {
            Phase::Dragging { rect, .. } => Some(*rect),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Committed { .. } | Phase::Cancelled)
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::PointerDown { x, y } => {
                // Presses outside Idle are ignored (no-op), not an error.
                if !matches!(self.phase, Phase::Idle) {
                    return Vec::new();
                }

                self.phase = Phase::Dragging {
                    anchor: (x, y),
                    rect: RectI32::from_points(x, y, x, y),
                };
                vec![Effect::RequestRedraw]
            }

            Action::PointerMove { x, y } => {
                let Phase::Dragging { anchor, rect } = &mut self.phase else {
                    return Vec::new();
                };

                let updated = RectI32::from_points(anchor.0, anchor.1, x, y);
                if updated == *rect {
                    return Vec::new();
                }

                *rect = updated;
                vec![Effect::RequestRedraw]
            }

            Action::PointerUp { x, y } => {
                let Phase::Dragging { anchor, .. } = self.phase else {
                    return Vec::new();
                };

                let rect = RectI32::from_points(anchor.0, anchor.1, x, y);
                if rect.exceeds_min_size(MIN_SELECTION_SIZE) {
                    self.phase = Phase::Committed { rect };
                    vec![Effect::Commit { rect }]
                } else {
                    self.phase = Phase::Cancelled;
                    vec![Effect::Cancel]
                }
            }

            Action::CancelKey => {
                if self.is_terminal() {
                    return Vec::new();
                }

                self.phase = Phase::Cancelled;
                vec![Effect::Cancel]
            }
        }
    }
}
