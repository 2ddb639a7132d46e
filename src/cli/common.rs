//! Shared error types for CLI command handlers.
//!
//! Every surfaced failure maps to the same process exit code; the kinds
//! exist so messages stay consistent and tests can assert on them.

use std::fmt;

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Exit code for any validation, not-found, or parse error.
pub const ERROR_EXIT_CODE: i32 = 2;

/// Error surfaced to the caller by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A required file, directory, theme, component, or token is missing.
    NotFound(String),
    /// A file that must parse (the theme store) is malformed.
    Parse(String),
    /// Bad or empty input from the caller.
    Validation(String),
    /// An underlying I/O operation failed.
    Io(String),
}

impl CliError {
    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        ERROR_EXIT_CODE
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(message)
            | Self::Parse(message)
            | Self::Validation(message)
            | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}
