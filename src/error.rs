//! Error Handling Module
//!
//! Defines the error types for the crop recommendation service.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for crop recommendation operations
#[derive(Error, Debug)]
pub enum CropServiceError {
    /// Error reading an artifact file from disk
    #[error("Failed to read artifact at '{0}': {1}")]
    ArtifactRead(PathBuf, #[source] std::io::Error),

    /// Error deserializing an artifact file
    #[error("Failed to parse artifact at '{0}': {1}")]
    ArtifactParse(PathBuf, #[source] serde_json::Error),

    /// Artifact deserialized but failed shape validation
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// Classifier produced a label with no crop table entry
    #[error("Classifier produced unmapped label {0}")]
    UnmappedLabel(i64),
}

/// Convenience Result type for crop recommendation operations
pub type Result<T> = std::result::Result<T, CropServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CropServiceError::UnmappedLabel(23);
        assert_eq!(format!("{}", err), "Classifier produced unmapped label 23");
    }

    #[test]
    fn test_artifact_read_error() {
        let path = PathBuf::from("/models/scaler.json");
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CropServiceError::ArtifactRead(path, io);
        assert!(format!("{}", err).contains("scaler.json"));
    }
}
