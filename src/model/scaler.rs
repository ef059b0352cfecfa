//! Feature scaler
//!
//! A fitted standardization transform, deserialized from a JSON artifact
//! exported by the training pipeline. Each feature is shifted by its fitted
//! mean and divided by its fitted scale, so the classifier sees inputs in
//! the same distribution it was trained on.

use serde::{Deserialize, Serialize};

use crate::error::{CropServiceError, Result};
use crate::NUM_FEATURES;

/// A fitted per-feature standardization scaler
///
/// Immutable after load; `transform` is the only operation the prediction
/// path uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean, in feature order (temperature, humidity, rainfall)
    pub mean: [f64; NUM_FEATURES],
    /// Per-feature scale (standard deviation), same order
    pub scale: [f64; NUM_FEATURES],
}

impl StandardScaler {
    /// Check that the fitted parameters are usable
    pub fn validate(&self) -> Result<()> {
        for (i, &m) in self.mean.iter().enumerate() {
            if !m.is_finite() {
                return Err(CropServiceError::InvalidArtifact(format!(
                    "scaler mean for feature {} is not finite",
                    i
                )));
            }
        }
        for (i, &s) in self.scale.iter().enumerate() {
            if !s.is_finite() || s <= 0.0 {
                return Err(CropServiceError::InvalidArtifact(format!(
                    "scaler scale for feature {} must be finite and positive, got {}",
                    i, s
                )));
            }
        }
        Ok(())
    }

    /// Normalize a raw feature vector
    pub fn transform(&self, features: [f64; NUM_FEATURES]) -> [f64; NUM_FEATURES] {
        let mut scaled = [0.0; NUM_FEATURES];
        for i in 0..NUM_FEATURES {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}
