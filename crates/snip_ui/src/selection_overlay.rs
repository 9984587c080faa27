use snip_rendering::{Color, Rectangle, RenderItem, RenderList, z_order};

/// Platform-neutral integer rectangle.
///
/// We intentionally reuse the core `RectI32` so UI and core share the same
/// geometry type.
pub use snip_app::selection::RectI32;

/// Opacity of the overlay surface itself, drawn over the frozen snapshot so
/// the user sees the screen through a dim veil while selecting.
pub const OVERLAY_OPACITY: f32 = 0.3;

#[inline]
fn to_rectangle_f32(rect: RectI32) -> Rectangle {
    Rectangle {
        x: rect.left as f32,
        y: rect.top as f32,
        width: (rect.right - rect.left) as f32,
        height: (rect.bottom - rect.top) as f32,
    }
}

#[derive(Debug, Clone)]
pub struct SelectionOverlayStyle {
    pub mask_color: Color,
    pub border_color: Color,
    pub border_width: f32,
}

impl Default for SelectionOverlayStyle {
    fn default() -> Self {
        Self {
            // Alpha 100/255, matching the original capture surface.
            mask_color: Color::rgba(0.0, 0.0, 0.0, 100.0 / 255.0),
            border_color: Color::RED,
            border_width: 2.0,
        }
    }
}

/// Compute the four darkening rectangles outside the selection.
///
/// The rectangles (above, left, right, below) exactly tile "screen minus
/// selection": the top and bottom bands span the full screen width while the
/// left and right bands are limited to the selection's vertical extent, so
/// nothing is darkened twice and no gap is left at the selection border.
/// Rectangles degenerate to zero area when the selection touches a screen
/// edge.
pub fn mask_regions(screen_size: (i32, i32), selection: RectI32) -> [RectI32; 4] {
    let (width, height) = screen_size;

    [
        // Above.
        RectI32 {
            left: 0,
            top: 0,
            right: width,
            bottom: selection.top,
        },
        // Left.
        RectI32 {
            left: 0,
            top: selection.top,
            right: selection.left,
            bottom: selection.bottom,
        },
        // Right.
        RectI32 {
            left: selection.right,
            top: selection.top,
            right: width,
            bottom: selection.bottom,
        },
        // Below.
        RectI32 {
            left: 0,
            top: selection.bottom,
            right: width,
            bottom: height,
        },
    ]
}

pub fn build_selection_overlay_render_list(
    screen_size: (i32, i32),
    selection_rect: Option<RectI32>,
) -> Option<RenderList> {
    build_selection_overlay_render_list_with_style(
        screen_size,
        selection_rect,
        &SelectionOverlayStyle::default(),
    )
}

/// Build the overlay render list for one repaint.
///
/// Returns `None` when there is no drag selection yet or the selection has a
/// zero dimension; the host then shows only the base dim veil.
pub fn build_selection_overlay_render_list_with_style(
    screen_size: (i32, i32),
    selection_rect: Option<RectI32>,
    style: &SelectionOverlayStyle,
) -> Option<RenderList> {
    let selection_rect = selection_rect?;
    if selection_rect.width() <= 0 || selection_rect.height() <= 0 {
        return None;
    }

    let mut render_list = RenderList::with_capacity(5);

    // 1) Border.
    render_list.submit(RenderItem::SelectionBorder {
        rect: to_rectangle_f32(selection_rect),
        color: style.border_color,
        width: style.border_width,
        z_order: z_order::SELECTION_BORDER,
    });

    // 2) Mask, as four non-overlapping rectangles around the selection.
    for region in mask_regions(screen_size, selection_rect) {
        render_list.submit(RenderItem::MaskRect {
            rect: to_rectangle_f32(region),
            color: style.mask_color,
            z_order: z_order::MASK,
        });
    }

    render_list.sort_by_z_order();
    Some(render_list)
}
