//! Error types for VOY core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for VOY operations.
pub type Result<T> = std::result::Result<T, VoyError>;

/// Core error type for VOY operations.
#[derive(Debug, Error)]
pub enum VoyError {
    /// Key derivation, encryption or decryption error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Ciphertext could not be decoded (bad base64, truncated payload, bad UTF-8)
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<base64::DecodeError> for VoyError {
    fn from(err: base64::DecodeError) -> Self {
        VoyError::Encoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for VoyError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        VoyError::Encoding(err.to_string())
    }
}
