//! Error types for plurality operations.
//!
//! Every failure is detected before any distance is computed and reported
//! as one of the variants below. [`PluralityError::kind`] groups them into
//! configuration, precondition and data failures.

use std::fmt;

/// Broad classification of a [`PluralityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid `k`, training fraction or trial count.
    Configuration,
    /// Empty inputs, unfitted models, mismatched shapes.
    Precondition,
    /// Malformed input: ragged rows, non-numeric or non-finite features.
    Data,
    /// Underlying I/O failure.
    Io,
    /// Evaluation stopped through a cancellation token.
    Cancelled,
}

/// Main error type for plurality operations.
///
/// # Examples
///
/// ```
/// use plurality::error::{ErrorKind, PluralityError};
///
/// let err = PluralityError::InvalidHyperparameter {
///     param: "k".to_string(),
///     value: "0".to_string(),
///     constraint: ">= 1".to_string(),
/// };
/// assert_eq!(err.kind(), ErrorKind::Configuration);
/// assert!(err.to_string().contains("Invalid hyperparameter"));
/// ```
#[derive(Debug)]
pub enum PluralityError {
    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A required input was empty.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Model used before `fit`.
    NotFitted,

    /// Malformed input data.
    InvalidData {
        /// Error description
        message: String,
    },

    /// Evaluation was cancelled before completion.
    Cancelled,

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl PluralityError {
    /// Maps the error onto its [`ErrorKind`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PluralityError::InvalidHyperparameter { .. } => ErrorKind::Configuration,
            PluralityError::EmptyInput { .. }
            | PluralityError::DimensionMismatch { .. }
            | PluralityError::NotFitted => ErrorKind::Precondition,
            PluralityError::InvalidData { .. } => ErrorKind::Data,
            PluralityError::Io(_) => ErrorKind::Io,
            PluralityError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn invalid_hyperparameter(
        param: &str,
        value: impl fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create a malformed data error
    #[must_use]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }
}

impl fmt::Display for PluralityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluralityError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PluralityError::EmptyInput { context } => write!(f, "empty input: {context}"),
            PluralityError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            PluralityError::NotFitted => write!(f, "Model not fitted"),
            PluralityError::InvalidData { message } => write!(f, "Invalid data: {message}"),
            PluralityError::Cancelled => write!(f, "Evaluation cancelled"),
            PluralityError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PluralityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PluralityError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PluralityError {
    fn from(err: std::io::Error) -> Self {
        PluralityError::Io(err)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PluralityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = PluralityError::invalid_hyperparameter("k", 0, ">= 1");
        let msg = err.to_string();
        assert!(msg.contains("Invalid hyperparameter"));
        assert!(msg.contains("k = 0"));
        assert!(msg.contains(">= 1"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = PluralityError::dimension_mismatch("n_features", 4, 3);
        let msg = err.to_string();
        assert!(msg.contains("n_features=4"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = PluralityError::empty_input("training set");
        assert_eq!(err.to_string(), "empty input: training set");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            PluralityError::invalid_hyperparameter("k", 9, "<= 4").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            PluralityError::empty_input("x").kind(),
            ErrorKind::Precondition
        );
        assert_eq!(
            PluralityError::dimension_mismatch("n", 1, 2).kind(),
            ErrorKind::Precondition
        );
        assert_eq!(PluralityError::NotFitted.kind(), ErrorKind::Precondition);
        assert_eq!(PluralityError::invalid_data("nan").kind(), ErrorKind::Data);
        assert_eq!(PluralityError::Cancelled.kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PluralityError = io_err.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        assert!(PluralityError::NotFitted.source().is_none());
    }
}
