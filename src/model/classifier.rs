//! Crop classifier
//!
//! A fitted decision-tree classifier deserialized from a JSON artifact.
//! The prediction path treats it as opaque: a normalized feature vector goes
//! in, exactly one integer class label comes out. The node array is the
//! export format of the training pipeline, not something this service edits.

use serde::{Deserialize, Serialize};

use crate::error::{CropServiceError, Result};
use crate::NUM_FEATURES;

/// A single node in the fitted decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    /// Internal split: go left if `features[feature] <= threshold`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying the predicted class label
    Leaf { label: i64 },
}

/// A fitted decision-tree classifier
///
/// Nodes are stored in an array with the root at index 0. Children always
/// point forward in the array, so a walk from the root must terminate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropClassifier {
    pub nodes: Vec<TreeNode>,
}

impl CropClassifier {
    /// Check that the tree is structurally sound
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(CropServiceError::InvalidArtifact(
                "classifier has no nodes".to_string(),
            ));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= NUM_FEATURES {
                    return Err(CropServiceError::InvalidArtifact(format!(
                        "node {} splits on feature {}, but inputs have {} features",
                        idx, feature, NUM_FEATURES
                    )));
                }
                if !threshold.is_finite() {
                    return Err(CropServiceError::InvalidArtifact(format!(
                        "node {} has non-finite threshold",
                        idx
                    )));
                }
                // Forward-pointing children guarantee termination
                if *left <= idx
                    || *right <= idx
                    || *left >= self.nodes.len()
                    || *right >= self.nodes.len()
                {
                    return Err(CropServiceError::InvalidArtifact(format!(
                        "node {} has out-of-order child indices ({}, {})",
                        idx, left, right
                    )));
                }
            }
        }
        Ok(())
    }

    /// Predict the class label for a normalized feature vector
    pub fn predict(&self, features: [f64; NUM_FEATURES]) -> i64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { label } => return *label,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}
