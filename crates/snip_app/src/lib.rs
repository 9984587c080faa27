pub mod selection;
pub mod viewer;

pub use selection::RectI32;
pub use viewer::DeliveryMode;
