//! Prediction endpoint - the core request/response contract
//!
//! Accepts three agricultural measurements, normalizes them with the fitted
//! scaler, classifies the result, and answers with the recommended crop.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::crops::crop_name;
use crate::error::CropServiceError;
use crate::state::SharedState;

/// Request body for POST /predict
///
/// All three fields are required and numeric; the typed extractor rejects
/// anything else before the handler runs.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
}

/// Response body for a successful prediction
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub crop: String,
}

/// POST /predict - Recommend a crop for the given measurements
pub async fn predict(
    State(state): State<SharedState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let features = [request.temperature, request.humidity, request.rainfall];

    let scaled = state.scaler.transform(features);
    let label = state.classifier.predict(scaled);

    // A label outside the crop table means the classifier and table disagree
    // about the class encoding. Fail loudly instead of inventing a crop.
    let crop = crop_name(label).ok_or_else(|| {
        let err = CropServiceError::UnmappedLabel(label);
        error!("{}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })?;

    debug!("Predicted label {} ({}) for input {:?}", label, crop, features);

    Ok(Json(PredictResponse {
        crop: crop.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::model::{CropClassifier, StandardScaler, TreeNode};
    use crate::state::AppState;

    fn state_with_leaf(label: i64) -> SharedState {
        let scaler = StandardScaler {
            mean: [25.0, 70.0, 100.0],
            scale: [5.0, 10.0, 50.0],
        };
        let classifier = CropClassifier {
            nodes: vec![TreeNode::Leaf { label }],
        };
        Arc::new(AppState::new(scaler, classifier))
    }

    #[tokio::test]
    async fn test_predict_returns_crop_name() {
        let state = state_with_leaf(1);
        let request = PredictRequest {
            temperature: 25.0,
            humidity: 80.0,
            rainfall: 200.0,
        };

        let response = predict(State(state), Json(request)).await.unwrap();
        assert_eq!(response.0.crop, "Rice");
    }

    #[tokio::test]
    async fn test_unmapped_label_is_a_server_error() {
        let state = state_with_leaf(23);
        let request = PredictRequest {
            temperature: 25.0,
            humidity: 80.0,
            rainfall: 200.0,
        };

        let err = predict(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.1.contains("23"));
    }

    #[tokio::test]
    async fn test_label_zero_is_a_server_error() {
        let state = state_with_leaf(0);
        let request = PredictRequest {
            temperature: 10.0,
            humidity: 50.0,
            rainfall: 20.0,
        };

        let err = predict(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
