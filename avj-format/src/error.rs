//! Error types for AVJ decoding

use thiserror::Error;

/// AVJ error types
///
/// Only conditions that abort a whole run live here. Malformed fields never
/// surface as errors; the decoder drops them instead.
#[derive(Debug, Error)]
pub enum AvjError {
    /// Document root is not a JSON object.
    #[error("Document root must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the value found at the root
        found: &'static str,
    },
    /// A configured limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// Input bytes are not valid UTF-8.
    #[error("Invalid UTF-8 input: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AvjError>;
