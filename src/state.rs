//! Application state for the crop recommendation server
//!
//! Holds the loaded model artifacts as shared, read-only state. Nothing is
//! mutated after startup, so handlers read without synchronization.

use std::sync::Arc;
use std::time::Instant;

use crate::model::{CropClassifier, StandardScaler};

/// Shared application state
pub struct AppState {
    /// Fitted feature scaler, loaded once at startup
    pub scaler: StandardScaler,
    /// Fitted crop classifier, loaded once at startup
    pub classifier: CropClassifier,
    /// Server start time
    pub started_at: Instant,
}

impl AppState {
    pub fn new(scaler: StandardScaler, classifier: CropClassifier) -> Self {
        Self {
            scaler,
            classifier,
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
