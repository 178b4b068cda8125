//! Error types for the casetab table generator.

use thiserror::Error;

/// Primary error type for UCD download and table generation.
#[derive(Error, Debug)]
pub enum UcdError {
    #[error("download failed: {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("download failed: {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("malformed hex in field {field} on line {line}: {text:?}")]
    MalformedHex {
        line: usize,
        field: usize,
        text: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl UcdError {
    /// True for failures of the download stage (transport or HTTP status).
    pub fn is_download_error(&self) -> bool {
        matches!(self, UcdError::HttpStatus { .. } | UcdError::Transport { .. })
    }
}

/// Convenience Result type alias for UcdError.
pub type Result<T> = std::result::Result<T, UcdError>;
