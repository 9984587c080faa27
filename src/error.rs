//! Unified error types for the host-side capture flow.
//!
//! OCR outcomes are not errors: the pipeline folds recognition failures into
//! `RecognitionOutcome` variants. This taxonomy covers the faults around the
//! pipeline: capture, clipboard, configuration, and I/O.

use std::io;

use thiserror::Error;

/// Main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error("clipboard operation failed: {0}")]
    Clipboard(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
