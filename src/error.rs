//! Error types for structure renaming

use crate::types::Handle;
use std::io;
use thiserror::Error;

/// Main error type for rename operations
#[derive(Debug, Error)]
pub enum RenameError {
    /// The requested name is empty
    #[error("Invalid name")]
    InvalidName,

    /// The user dismissed a selection or text prompt
    #[error("Canceled")]
    Cancelled,

    /// Structure not found in the drawing
    #[error("Object not found: handle {0}")]
    ObjectNotFound(Handle),

    /// A structure with this handle already exists
    #[error("Duplicate handle: {0}")]
    DuplicateHandle(Handle),

    /// Malformed structure listing
    #[error("Parse error: {0}")]
    Parse(String),

    /// The host refused or failed a write
    #[error("Host error: {0}")]
    Host(String),

    /// A write failed and some earlier writes could not be undone
    #[error("{source}; names not restored for {}", join_handles(.handles))]
    Unrestored {
        source: Box<RenameError>,
        handles: Vec<Handle>,
    },

    /// IO error occurred while reading or writing a listing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

fn join_handles(handles: &[Handle]) -> String {
    handles
        .iter()
        .map(Handle::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for rename operations
pub type Result<T> = std::result::Result<T, RenameError>;

impl From<String> for RenameError {
    fn from(s: String) -> Self {
        RenameError::Custom(s)
    }
}

impl From<&str> for RenameError {
    fn from(s: &str) -> Self {
        RenameError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RenameError::InvalidName.to_string(), "Invalid name");
        assert_eq!(
            RenameError::ObjectNotFound(Handle::new(0x2A)).to_string(),
            "Object not found: handle 0x2A"
        );
    }

    #[test]
    fn test_host_error() {
        let err = RenameError::Host("structure 0x3 is locked".to_string());
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_unrestored_error() {
        let err = RenameError::Unrestored {
            source: Box::new(RenameError::Host("disk full".to_string())),
            handles: vec![Handle::new(0x1), Handle::new(0x2)],
        };
        assert_eq!(
            err.to_string(),
            "Host error: disk full; names not restored for 0x1, 0x2"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: RenameError = io_err.into();
        assert!(matches!(err, RenameError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let err: RenameError = "boom".into();
        assert!(matches!(err, RenameError::Custom(ref m) if m == "boom"));
    }
}
