//! Core data types for the Atelier assistant API.
//!
//! This crate provides the foundation data types shared across the Atelier
//! workspace: conversation messages, generation requests, image styles, the
//! canned-response knowledge base, and the pluggable random source used for
//! uniform selection.

pub mod knowledge;
mod message;
mod request;
mod role;
mod sampler;
mod style;

pub use knowledge::{Category, KnowledgeBase};
pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use sampler::{Sampler, ThreadRngSampler};
pub use style::ImageStyle;
