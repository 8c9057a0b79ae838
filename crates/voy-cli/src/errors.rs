//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use voy_core::VoyError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Nothing matched the request (non-holiday date, missing config)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// A protected value could not be decrypted
    ProtectedData(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::ProtectedData(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<VoyError> for CliError {
    fn from(err: VoyError) -> Self {
        match err {
            VoyError::InvalidInput(_) => CliError::InvalidInput(err.to_string()),
            VoyError::Crypto(_) | VoyError::Encoding(_) => CliError::ProtectedData(err.to_string()),
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::ProtectedData(_) => exit_codes::PROTECTED_DATA,
        }
    }
}

/// Exit code for any error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(exit_codes::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), 3);
        assert_eq!(CliError::invalid_input("x").exit_code(), 4);
        assert_eq!(CliError::ProtectedData("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_core_errors_map_to_cli_errors() {
        let err: CliError = VoyError::InvalidInput("Year 999999 is out of range".into()).into();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);

        let err: CliError = VoyError::Crypto("tag mismatch".into()).into();
        assert_eq!(err.exit_code(), exit_codes::PROTECTED_DATA);
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err = anyhow::Error::from(CliError::not_found("missing", "Hint: look"));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&err), exit_codes::FAILURE);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("No config", "Hint: run voy config init");
        assert_eq!(err.to_string(), "No config\nHint: run voy config init");
    }
}
