//! Error types for run artifact ingestion.
//!
//! Artifacts are produced by a separate execution process that may crash,
//! be partially written, or emit numeric garbage. The public readers never
//! surface these errors: they collapse them into the neutral value of the
//! requested type (`[]`, `{}`, `None`). `ArtifactError` is the internal
//! reason a read fell back, logged at debug level.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reason an artifact could not be read as requested.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact does not exist.
    #[error("artifact not found: {}", .0.display())]
    Missing(PathBuf),

    /// The artifact exists but could not be read.
    #[error("failed to read artifact '{}': {source}", path.display())]
    Io {
        /// Path to the artifact.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The artifact is not valid JSON for the requested shape.
    #[error("malformed JSON in '{}': {source}", path.display())]
    Json {
        /// Path to the artifact.
        path: PathBuf,
        /// The underlying decode error.
        source: serde_json::Error,
    },

    /// A JSON artifact decoded, but its top level is not an object.
    #[error("expected a JSON object in '{}'", .0.display())]
    NotAnObject(PathBuf),
}

impl ArtifactError {
    /// Classify an IO error for the given path.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Whether the artifact was simply absent.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified_as_missing() {
        let err = ArtifactError::from_io(
            Path::new("logs/run_1/order.log"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.is_missing());
        assert_eq!(err.to_string(), "artifact not found: logs/run_1/order.log");
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = ArtifactError::from_io(
            Path::new("value.log"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_missing());
        assert!(matches!(err, ArtifactError::Io { .. }));
    }
}
