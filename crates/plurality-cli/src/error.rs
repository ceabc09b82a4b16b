//! Error types for plurality-cli

use plurality::{ErrorKind, PluralityError};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Malformed input data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Bad parameter or violated precondition
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Any other classifier failure
    #[error("Classification failed: {0}")]
    Classification(String),
}

impl CliError {
    /// Numeric status reported to the shell
    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => 3,
            Self::InvalidData(_) => 4,
            Self::InvalidConfig(_) => 5,
            Self::Io(_) | Self::Classification(_) => 1,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<PluralityError> for CliError {
    fn from(e: PluralityError) -> Self {
        match e.kind() {
            ErrorKind::Configuration | ErrorKind::Precondition => {
                Self::InvalidConfig(e.to_string())
            }
            ErrorKind::Data => Self::InvalidData(e.to_string()),
            ErrorKind::Io => Self::Io(e.to_string()),
            ErrorKind::Cancelled => Self::Classification(e.to_string()),
        }
    }
}
