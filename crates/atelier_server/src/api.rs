//! HTTP API for chat, image generation, health, and knowledge summary.

use crate::chat::ResponseSelector;
use crate::request::{ChatMessageRequest, GenerateImageRequest};
use crate::resolve::ImageResolver;
use crate::response::{
    ChatMessageResponse, ErrorResponse, GenerateImageResponse, HealthResponse, KnowledgeResponse,
};
use atelier_core::KnowledgeBase;
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, instrument};

/// API server state, shared across requests.
#[derive(Clone)]
pub struct ApiState {
    /// Chat response selector.
    pub selector: Arc<ResponseSelector>,
    /// Image source resolver.
    pub resolver: Arc<ImageResolver>,
    /// Knowledge base summarized by `/knowledge`.
    pub knowledge: Arc<KnowledgeBase>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(
        selector: Arc<ResponseSelector>,
        resolver: Arc<ImageResolver>,
        knowledge: Arc<KnowledgeBase>,
    ) -> Self {
        Self {
            selector,
            resolver,
            knowledge,
        }
    }
}

/// Creates the API router with permissive CORS on every route.
pub fn create_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/chat", post(chat))
        .route("/generate_image", post(generate_image))
        .route("/health", get(health_check))
        .route("/knowledge", get(get_knowledge))
        .layer(cors)
        .with_state(state)
}

/// Handle a chat message.
#[instrument(skip(state, body))]
async fn chat(State(state): State<ApiState>, Json(body): Json<ChatMessageRequest>) -> Response {
    if body.message().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No message provided")),
        )
            .into_response();
    }

    match state.selector.select(body.message()).await {
        Ok(text) => (StatusCode::OK, Json(ChatMessageResponse::success(text))).into_response(),
        Err(e) => {
            error!(error = %e, "Chat selection failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Generate or retrieve an image for a prompt.
#[instrument(skip(state, body))]
async fn generate_image(
    State(state): State<ApiState>,
    Json(body): Json<GenerateImageRequest>,
) -> impl IntoResponse {
    let resolved = state.resolver.resolve(body.prompt(), body.style()).await;
    (StatusCode::OK, Json(GenerateImageResponse::from(resolved)))
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}

/// Summarize the fallback knowledge base.
#[instrument(skip(state))]
async fn get_knowledge(State(state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(KnowledgeResponse::from_knowledge(&state.knowledge)),
    )
}
