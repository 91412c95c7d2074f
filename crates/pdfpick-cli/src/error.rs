//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use pdfpick_core::{BindingError, CoreError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid input (arguments or decoded text).
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error (stdin, stdout).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: General error
    /// - 2: Invalid input
    /// - 74: IO error (EX_IOERR)
    /// - 78: Configuration error (EX_CONFIG)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Input(_) => 2,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Binding(e) => e.into(),
            CoreError::PageRange(e) => Self::Input(e.to_string()),
            CoreError::Settings(e) => e.into(),
            CoreError::Io(e) => e.into(),
            CoreError::Pdf(e) => Self::Core(e.to_string()),
        }
    }
}

impl From<BindingError> for CliError {
    fn from(err: BindingError) -> Self {
        Self::Input(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
