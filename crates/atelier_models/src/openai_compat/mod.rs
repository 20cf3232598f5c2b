//! Generic OpenAI-compatible chat completions client.
//!
//! This module provides a reusable client for any API that follows the
//! OpenAI chat completions format, which covers OpenAI itself plus the
//! drop-in compatible providers.

mod client;
mod conversions;
mod dto;

pub use client::ChatCompletionClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, OpenAICompatError};

/// Default chat completions endpoint.
pub const DEFAULT_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
