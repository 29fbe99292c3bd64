use std::io;
use thiserror::Error;

/// Errors that can occur while building or handing off a management request
#[derive(Debug, Error)]
pub enum MgmtError {
    // ===== Scanner Errors =====
    /// Option not present in the option table
    #[error("unrecognized option '{option}'")]
    UnrecognizedOption {
        /// The option as written on the command line
        option: String,
    },

    /// Long option prefix matches more than one table entry
    #[error("option '{option}' is ambiguous; possibilities: {candidates}")]
    AmbiguousOption {
        /// The option as written on the command line
        option: String,
        /// Space-separated list of the matching long names
        candidates: String,
    },

    /// Option requires an argument but none was given
    #[error("option '{option}' requires an argument")]
    MissingArgument {
        /// The option as written on the command line
        option: String,
    },

    /// Argument attached to an option that takes none (`--help=yes`)
    #[error("option '{option}' doesn't allow an argument")]
    UnexpectedArgument {
        /// The option as written on the command line
        option: String,
    },

    // ===== Resolver Errors =====
    /// Action keyword not in the action table
    #[error("unrecognized action '{keyword}'")]
    UnresolvedActionKeyword {
        /// The keyword as given
        keyword: String,
    },

    /// Management id is neither a known name nor a 16-bit decimal number
    #[error("unrecognized management id '{input}'")]
    UnresolvedManagementId {
        /// The text as given
        input: String,
    },

    /// Timeout is not an unsigned decimal integer
    #[error("malformed timeout '{input}'")]
    MalformedTimeout {
        /// The text as given
        input: String,
    },

    // ===== Validation Errors =====
    /// Request is missing a field or combines fields that contradict each other
    #[error("incomplete request: {reason}")]
    IncompleteRequest {
        /// Description of what is missing or contradictory
        reason: String,
    },

    /// Action is not allowed for the selected management id
    #[error("action {action} is not supported by {management_id}")]
    ActionNotSupported {
        /// The requested action
        action: String,
        /// Name of the management id
        management_id: String,
    },

    // ===== I/O Errors =====
    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rendering JSON output failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MgmtError {
    /// Check if this error should stop the run.
    ///
    /// Every input error is recoverable: scanning continues and the request
    /// is still handed off.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        false
    }

    /// Check if this error was raised by the argument scanner
    #[must_use]
    pub fn is_scanner_error(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedOption { .. }
                | Self::AmbiguousOption { .. }
                | Self::MissingArgument { .. }
                | Self::UnexpectedArgument { .. }
        )
    }

    /// Check if this error was raised by request validation
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::IncompleteRequest { .. } | Self::ActionNotSupported { .. }
        )
    }
}

/// Result type alias for management request operations
pub type Result<T> = std::result::Result<T, MgmtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MgmtError::UnresolvedActionKeyword {
            keyword: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized action 'bogus'");

        let err = MgmtError::MissingArgument {
            option: "--port".to_string(),
        };
        assert_eq!(err.to_string(), "option '--port' requires an argument");
    }

    #[test]
    fn test_error_is_never_fatal() {
        assert!(
            !MgmtError::UnrecognizedOption {
                option: "-x".to_string()
            }
            .is_fatal()
        );
        assert!(
            !MgmtError::MalformedTimeout {
                input: "abc".to_string()
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_error_classification() {
        let scan = MgmtError::AmbiguousOption {
            option: "--a".to_string(),
            candidates: "--action --address".to_string(),
        };
        assert!(scan.is_scanner_error());
        assert!(!scan.is_validation_error());

        let invalid = MgmtError::IncompleteRequest {
            reason: "no action".to_string(),
        };
        assert!(invalid.is_validation_error());
        assert!(!invalid.is_scanner_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: MgmtError = io_err.into();

        assert!(matches!(err, MgmtError::Io(_)));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MgmtError>();
    }
}
