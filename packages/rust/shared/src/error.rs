//! Error types for sans-index.
//!
//! Library crates use [`SansIndexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for readable reports.

use std::path::PathBuf;

/// Top-level error type for all sans-index operations.
#[derive(Debug, thiserror::Error)]
pub enum SansIndexError {
    /// The input document does not exist.
    #[error("input not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not valid YAML.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// The input is valid YAML but not shaped like a course outline.
    #[error("malformed document: {message}")]
    Malformed { message: String },

    /// The workbook could not be built or saved.
    #[error("failed to write workbook {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// Runtime configuration could not be resolved.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SansIndexError>;

impl SansIndexError {
    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a malformed-document error from any displayable message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    ///
    /// `NotFound` is lifted into [`SansIndexError::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io { path, source }
    }

    /// Create a workbook write error for `path`.
    pub fn write(path: impl Into<PathBuf>, msg: impl ToString) -> Self {
        Self::Write {
            path: path.into(),
            message: msg.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SansIndexError::malformed("book 1: expected a sequence of chapters");
        assert_eq!(
            err.to_string(),
            "malformed document: book 1: expected a sequence of chapters"
        );

        let err = SansIndexError::write("out/course.xlsx", "permission denied");
        assert!(err.to_string().contains("out/course.xlsx"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn io_not_found_is_lifted() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SansIndexError::io("missing.yaml", source);
        assert!(matches!(err, SansIndexError::NotFound { .. }));
        assert_eq!(err.to_string(), "input not found: missing.yaml");

        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = SansIndexError::io("locked.yaml", source);
        assert!(matches!(err, SansIndexError::Io { .. }));
    }
}
