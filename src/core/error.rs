//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failures surfaced by fallible operations.
///
/// Only sink construction returns errors. Pattern compilation is fail-soft
/// (see [`LogFormatter::has_error`](crate::LogFormatter::has_error)) and
/// write failures on an open stream are absorbed, so neither appears here.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },
}

impl LoggerError {
    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }
}
