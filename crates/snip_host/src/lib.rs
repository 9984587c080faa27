pub mod capture;
pub mod clipboard;

#[cfg(windows)]
pub mod media_ocr;

pub use capture::PrimaryMonitorCapture;
pub use clipboard::SystemClipboard;

#[cfg(windows)]
pub use media_ocr::MediaOcrBackend;
