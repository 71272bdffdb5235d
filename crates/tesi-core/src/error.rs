//! Error types for tesi-core

use std::path::Path;

use thiserror::Error;

/// Result type alias for Tesi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the Tesi crates
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error with the path that triggered it
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Underlying I/O error
        source: std::io::Error,
        /// Path involved in the failed operation
        path: String,
    },

    /// Dataset could not be parsed
    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        /// Underlying serde error
        source: serde_json::Error,
        /// Path of the dataset file
        path: String,
    },

    /// A record failed validation
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested resource was not found
    #[error("Not found: {what} ({kind})")]
    NotFound {
        /// Identifier or path that was looked up
        what: String,
        /// Kind of resource (for diagnostics)
        kind: String,
    },

    /// A backend operation failed
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl Error {
    /// Create an I/O error annotated with the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            source,
            path: path.to_string_lossy().into_owned(),
        }
    }

    /// Create a parse error annotated with the dataset path.
    pub fn parse_with_path(source: serde_json::Error, path: &Path) -> Self {
        Self::Parse {
            source,
            path: path.to_string_lossy().into_owned(),
        }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(what: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::NotFound {
            what: what.into(),
            kind: kind.into(),
        }
    }

    /// Create an operation error.
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(source, Path::new("/data/theses.json"));
        let msg = err.to_string();
        assert!(msg.contains("/data/theses.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("thesis-42", "thesis record");
        assert_eq!(err.to_string(), "Not found: thesis-42 (thesis record)");
    }

    #[test]
    fn test_operation_display() {
        let err = Error::operation("commit failed");
        assert!(err.to_string().contains("commit failed"));
    }
}
