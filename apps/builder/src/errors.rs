#![allow(dead_code)]

use thiserror::Error;

use crate::export::ExportError;

/// Application-level error type surfaced by the shell.
/// Export failures are recoverable and retryable; composition never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Language error: {0}")]
    Language(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
