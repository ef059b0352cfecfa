//! # Crop Recommendation Service
//!
//! A Rust library and HTTP server exposing a pre-trained crop classification
//! model. Given three agricultural measurements (temperature, humidity,
//! rainfall), the service normalizes them with a fitted scaler, runs a fitted
//! classifier, and returns a human-readable crop name.
//!
//! ## Modules
//!
//! - `model`: loading and running the fitted scaler and classifier artifacts
//! - `crops`: static table mapping class labels to crop names
//! - `routes`: axum HTTP handlers and router construction
//! - `state`: shared read-only application state
//! - `error`: error types for artifact loading and prediction

pub mod crops;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;

// Re-export commonly used items for convenience
pub use crops::{crop_name, CROP_NAMES, NUM_CROPS};
pub use error::{CropServiceError, Result};
pub use model::{load_artifacts, CropClassifier, StandardScaler, TreeNode};
pub use state::{AppState, SharedState};

/// Number of input features, in fixed order: temperature, humidity, rainfall
pub const NUM_FEATURES: usize = 3;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
