//! Crop Recommendation Server
//!
//! HTTP API server exposing a pre-trained crop classification model.
//! Loads the fitted scaler and classifier artifacts once at startup and
//! serves crop recommendations for agricultural measurements.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crop_recommendation_server::model;
use crop_recommendation_server::routes;
use crop_recommendation_server::state::AppState;

/// Crop Recommendation Server
#[derive(Parser, Debug)]
#[command(name = "crop-recommendation-server")]
#[command(version = "0.1.0")]
#[command(about = "HTTP API server for crop recommendation")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the fitted scaler artifact
    #[arg(long, env = "CROP_SCALER_PATH", default_value = "scaler.json")]
    scaler: PathBuf,

    /// Path to the fitted classifier artifact
    #[arg(long, env = "CROP_MODEL_PATH", default_value = "classifier.json")]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Crop Recommendation Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Scaler artifact:     {:?}", cli.scaler);
    info!("  Classifier artifact: {:?}", cli.model);

    // Load model artifacts. Missing or malformed artifacts are fatal;
    // the process must not start serving without a usable model.
    let (scaler, classifier) = model::load_artifacts(&cli.scaler, &cli.model)?;
    info!("Model artifacts loaded");

    // Create shared state
    let state = Arc::new(AppState::new(scaler, classifier));

    // Build router
    let app = routes::router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
