//! Remote API clients for the Atelier assistant API.
//!
//! Two remote dependencies back the service: an OpenAI-compatible chat
//! completions endpoint for text generation and the Unsplash search API for
//! photo lookup. Both are optional at runtime; callers absorb every client
//! error and fall back to local behavior.

pub mod openai_compat;
pub mod unsplash;

pub use openai_compat::{ChatCompletionClient, OpenAICompatError};
pub use unsplash::{UnsplashClient, UnsplashError};
