pub mod events;
pub mod traits;

pub use events::*;
pub use traits::*;
