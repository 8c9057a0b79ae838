//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Nothing matched (date is not a holiday, config file missing).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Protected data could not be decrypted (`decrypt --strict`).
    pub const PROTECTED_DATA: i32 = 5;
}

/// Program name used in headers and hints.
pub const BIN_NAME: &str = "voy";
