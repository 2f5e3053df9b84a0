// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::river_service::RiverService;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::opendata_client::OpendataClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{current_reading, health_check, history};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_settings()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(OpendataClient::new(settings.source));

    // Create service with its process-lifetime caches (application layer)
    let river_service = RiverService::new(repository);

    // Create application state
    let state = Arc::new(AppState { river_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/reading/current", get(current_reading))
        .route("/history", get(history))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = settings.server.bind.parse()?;
    tracing::info!("Starting rhein-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
