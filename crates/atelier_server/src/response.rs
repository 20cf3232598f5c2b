//! JSON response bodies for the HTTP surface.

use crate::resolve::{ImageSourceKind, ResolvedImage};
use atelier_core::KnowledgeBase;
use derive_getters::Getters;
use serde::Serialize;

/// Fixed capability summary reported by `GET /knowledge`.
const CAPABILITY_SUMMARY: [&str; 4] = [
    "Natural language conversations",
    "Image generation",
    "Information retrieval",
    "Creative assistance",
];

/// Successful `POST /chat` body.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct ChatMessageResponse {
    /// Selected response text
    response: String,
    /// Always "success"; failures use [`ErrorResponse`]
    status: String,
}

impl ChatMessageResponse {
    /// Wraps selected response text.
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            status: "success".to_string(),
        }
    }
}

/// Successful `POST /generate_image` body.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct GenerateImageResponse {
    /// Remote URL or self-contained data URI
    image_url: String,
    /// Origin of the image
    source: ImageSourceKind,
    /// Prompt echoed back
    prompt: String,
    /// Style tag echoed back
    style: String,
    /// Advisory note, present only for placeholder results
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl From<ResolvedImage> for GenerateImageResponse {
    fn from(resolved: ResolvedImage) -> Self {
        Self {
            image_url: resolved.image_url().clone(),
            source: *resolved.source(),
            prompt: resolved.prompt().clone(),
            style: resolved.style().clone(),
            note: resolved.note().clone(),
        }
    }
}

/// Error body for client and server failures.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct ErrorResponse {
    /// Description of the failure
    error: String,
}

impl ErrorResponse {
    /// Wraps a failure description.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    status: String,
    /// Service name
    service: String,
    /// Crate version
    version: String,
}

impl HealthResponse {
    /// The static healthy report.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "Atelier Assistant API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// `GET /knowledge` body.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct KnowledgeResponse {
    /// Category names, in insertion order
    topics: Vec<String>,
    /// Total canned responses across categories
    total_responses: usize,
    /// Fixed capability summary
    capabilities: Vec<String>,
}

impl KnowledgeResponse {
    /// Summarizes the knowledge base.
    pub fn from_knowledge(knowledge: &KnowledgeBase) -> Self {
        Self {
            topics: knowledge.topics().iter().map(|t| t.to_string()).collect(),
            total_responses: knowledge.total_responses(),
            capabilities: CAPABILITY_SUMMARY.iter().map(|c| c.to_string()).collect(),
        }
    }
}
