pub mod selection_overlay;

pub use selection_overlay::{
    OVERLAY_OPACITY, SelectionOverlayStyle, build_selection_overlay_render_list,
    build_selection_overlay_render_list_with_style, mask_regions,
};
