//! Core error types for vcterm-core

use thiserror::Error;

/// Failures of the dialog surface
#[derive(Error, Debug)]
pub enum DialogError {
    /// Terminal I/O failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream ended while a dialog was waiting for the operator
    #[error("input closed")]
    InputClosed,
}

/// Errors that abort navigation
///
/// Remote failures met while browsing are reported to the operator and do
/// not surface here.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Dialog surface failed
    #[error("dialog error: {0}")]
    Dialog(#[from] DialogError),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, CoreError>;
