//! Model artifacts
//!
//! Loads the fitted scaler and classifier from their JSON artifact files.
//! Both artifacts are read once at startup and held immutable for the
//! process lifetime; a missing or malformed artifact is fatal, so the
//! process never serves traffic with a partial model.

pub mod classifier;
pub mod scaler;

// Re-export main types for convenience
pub use classifier::{CropClassifier, TreeNode};
pub use scaler::StandardScaler;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CropServiceError, Result};

/// Read and deserialize a JSON artifact file
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CropServiceError::ArtifactRead(path.to_path_buf(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| CropServiceError::ArtifactParse(path.to_path_buf(), e))
}

/// Load and validate both model artifacts
///
/// No retries and no lazy loading: this runs once at startup and any error
/// propagates out of `main`.
pub fn load_artifacts(
    scaler_path: &Path,
    classifier_path: &Path,
) -> Result<(StandardScaler, CropClassifier)> {
    let scaler: StandardScaler = load_json(scaler_path)?;
    scaler.validate()?;

    let classifier: CropClassifier = load_json(classifier_path)?;
    classifier.validate()?;

    Ok((scaler, classifier))
}
