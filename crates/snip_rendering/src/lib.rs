pub mod render_list;
pub mod types;

pub use render_list::{RenderBackend, RenderItem, RenderList};
pub use types::{Color, Rectangle};

/// Z-order constants for overlay layers.
///
/// The snapshot veil sits below everything the render list produces; mask
/// rectangles darken the non-selected area and the border sits on top.
pub mod z_order {
    pub const MASK: i32 = 10;
    pub const SELECTION_BORDER: i32 = 20;
}
