//! HTTP service layer for the Atelier assistant API.
//!
//! Wires the response selector, image source resolver, and knowledge base
//! behind an axum router. Remote dependencies are optional: requests served
//! without credentials fall back to canned responses and locally rendered
//! placeholder images.

mod api;
mod chat;
mod config;
mod request;
mod resolve;
mod response;

pub use api::{ApiState, create_router};
pub use chat::ResponseSelector;
pub use config::ServiceConfig;
pub use request::{ChatMessageRequest, GenerateImageRequest};
pub use resolve::{ImageResolver, ImageSourceKind, ResolvedImage};
pub use response::{
    ChatMessageResponse, ErrorResponse, GenerateImageResponse, HealthResponse, KnowledgeResponse,
};
