//! Error types for diffscan.
//!
//! Uses thiserror for derive macros. Grammar failures inside hunk headers and
//! missing file markers are not errors at all; they degrade to skipped lines
//! and empty file names respectively.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffscan operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffScanError {
    /// A `start[,count]` token inside a hunk header is not a valid line range.
    #[error("malformed line range '{token}': {reason}")]
    MalformedRange { token: String, reason: String },

    /// The cancel token was set while the scan was still running.
    #[error("scan canceled before line {line} ({emitted} annotations emitted)")]
    ScanCanceled { line: usize, emitted: usize },

    /// An annotation was asked to do something it does not support.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// User provided invalid arguments, input, or configuration.
    #[error("{0}")]
    UserError(String),
}

impl DiffScanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffScanError::MalformedRange { .. } => exit_codes::USER_ERROR,
            DiffScanError::UserError(_) => exit_codes::USER_ERROR,
            DiffScanError::ScanCanceled { .. } => exit_codes::SCAN_CANCELED,
            DiffScanError::UnsupportedOperation(_) => exit_codes::UNSUPPORTED_OPERATION,
        }
    }

    pub(crate) fn malformed_range(token: &str, reason: impl Into<String>) -> Self {
        DiffScanError::MalformedRange {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for diffscan operations.
pub type Result<T> = std::result::Result<T, DiffScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DiffScanError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn canceled_scan_has_correct_exit_code() {
        let err = DiffScanError::ScanCanceled {
            line: 3,
            emitted: 2,
        };
        assert_eq!(err.exit_code(), exit_codes::SCAN_CANCELED);
    }

    #[test]
    fn unsupported_operation_has_correct_exit_code() {
        let err = DiffScanError::UnsupportedOperation("set_file_name".to_string());
        assert_eq!(err.exit_code(), exit_codes::UNSUPPORTED_OPERATION);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DiffScanError::malformed_range("1,x", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "malformed line range '1,x': invalid digit found in string"
        );

        let err = DiffScanError::ScanCanceled {
            line: 7,
            emitted: 4,
        };
        assert_eq!(
            err.to_string(),
            "scan canceled before line 7 (4 annotations emitted)"
        );
    }
}
