//! Error types for the ABO descrambler
//!
//! Parsing itself never fails: malformed records degrade to empty fields or
//! are skipped. The errors below cover the outer surfaces only.
//!
//! # Error Categories
//!
//! - **File Errors**: input file missing or unreadable (reported per file)
//! - **Runtime Errors**: async runtime could not be started
//! - **Output Errors**: CSV serialization or stdout write failures

use thiserror::Error;

/// Main error type for the ABO descrambler
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AboError {
    /// File not found at the specified path
    ///
    /// Recoverable at batch level: the file contributes an empty result.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading an input file
    #[error("I/O error{}: {message}", path.as_ref().map(|p| format!(" reading {}", p)).unwrap_or_default())]
    IoError {
        /// Path being read, when known
        path: Option<String>,
        /// Description of the I/O error
        message: String,
    },

    /// The async runtime could not be created
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the failure
        message: String,
    },

    /// Output could not be serialized or written
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for AboError {
    fn from(error: std::io::Error) -> Self {
        AboError::IoError {
            path: None,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AboError {
    fn from(error: csv::Error) -> Self {
        AboError::OutputError {
            message: error.to_string(),
        }
    }
}

impl AboError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AboError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Map a read failure for `path` to the matching variant
    pub fn read_failed(path: &str, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => AboError::file_not_found(path),
            _ => AboError::IoError {
                path: Some(path.to_string()),
                message: error.to_string(),
            },
        }
    }

    /// Create a RuntimeError
    pub fn runtime(message: impl Into<String>) -> Self {
        AboError::RuntimeError {
            message: message.into(),
        }
    }

    /// Create an OutputError
    pub fn output(message: impl Into<String>) -> Self {
        AboError::OutputError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        AboError::FileNotFound { path: "statement.gpc".to_string() },
        "File not found: statement.gpc"
    )]
    #[case::io_error_with_path(
        AboError::IoError { path: Some("a.gpc".to_string()), message: "Permission denied".to_string() },
        "I/O error reading a.gpc: Permission denied"
    )]
    #[case::io_error_without_path(
        AboError::IoError { path: None, message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::runtime(
        AboError::RuntimeError { message: "no threads".to_string() },
        "Runtime error: no threads"
    )]
    #[case::output(
        AboError::OutputError { message: "broken pipe".to_string() },
        "Output error: broken pipe"
    )]
    fn test_error_display(#[case] error: AboError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(
        std::io::ErrorKind::NotFound,
        AboError::FileNotFound { path: "x.gpc".to_string() }
    )]
    #[case::permission_denied(
        std::io::ErrorKind::PermissionDenied,
        AboError::IoError { path: Some("x.gpc".to_string()), message: "denied".to_string() }
    )]
    fn test_read_failed_mapping(#[case] kind: std::io::ErrorKind, #[case] expected: AboError) {
        let error = AboError::read_failed("x.gpc", std::io::Error::new(kind, "denied"));
        assert_eq!(error, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: AboError = io_error.into();
        assert!(matches!(error, AboError::IoError { path: None, .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
