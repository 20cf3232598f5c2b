//! Atelier assistant API server binary.
//!
//! Loads configuration from the environment, wires the selector and
//! resolver over the standard knowledge base, and serves the HTTP API until
//! interrupted.

use atelier_core::{KnowledgeBase, ThreadRngSampler};
use atelier_error::{AtelierResult, ConfigError, HttpError};
use atelier_server::{ApiState, ImageResolver, ResponseSelector, ServiceConfig, create_router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AtelierResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServiceConfig::from_env();
    info!(
        chat_enabled = config.openai_api_key().is_some(),
        photo_search_enabled = config.unsplash_access_key().is_some(),
        "Loaded service configuration"
    );

    let knowledge = Arc::new(KnowledgeBase::standard());
    let selector = Arc::new(ResponseSelector::new(
        knowledge.clone(),
        config.chat_client(),
        Arc::new(ThreadRngSampler),
    ));
    let resolver = Arc::new(ImageResolver::new(config.unsplash_client()));
    let app = create_router(ApiState::new(selector, resolver, knowledge));

    let listener = tokio::net::TcpListener::bind(config.bind())
        .await
        .map_err(|e| ConfigError::new(format!("Failed to bind {}: {}", config.bind(), e)))?;

    info!(address = %config.bind(), "Starting Atelier assistant server");
    info!("  POST /chat - Send chat messages");
    info!("  POST /generate_image - Generate images");
    info!("  GET /health - Health check");
    info!("  GET /knowledge - Knowledge base info");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Received Ctrl+C, shutting down");
}
