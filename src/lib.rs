pub mod error;
pub mod logging;
pub mod session;
pub mod viewer;

pub use error::{AppError, AppResult};
pub use session::{SelectionSession, SessionOutcome, SessionUpdate, wait_before_capture};
pub use viewer::{ViewerFlow, orchestrator_from_settings};

// Host-side capability implementations, re-exported so embedders need only
// this crate.
#[cfg(windows)]
pub use snip_host::MediaOcrBackend;
pub use snip_host::{PrimaryMonitorCapture, SystemClipboard};
