//! HTTP route handlers and router construction

pub mod health;
pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Build the application router with all routes and middleware
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/predict", post(predict::predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
