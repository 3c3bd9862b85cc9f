//! Error handling for curlparse

use thiserror::Error;

/// Main error type for curlparse operations
#[derive(Error, Debug)]
pub enum CurlParseError {
    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Missing URL: no positional URL argument found")]
    MissingUrl,

    #[error("Unsupported method: {0}. Use permissive mode to accept any method")]
    UnsupportedMethod(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Result type alias for curlparse operations
pub type Result<T> = std::result::Result<T, CurlParseError>;
