pub mod engine;
pub mod language;
pub mod orchestrator;
pub mod preprocess;
pub mod types;

pub use engine::{RecognitionBackend, RecognitionEngine};
pub use language::{DEFAULT_LANGUAGE_PREFERENCE, select_language};
pub use orchestrator::{BusyGuard, OcrOrchestrator};
pub use types::RecognitionOutcome;

// Re-export so downstream crates don't need to depend on `snip_app` for the
// delivery mode alone.
pub use snip_app::viewer::DeliveryMode;
