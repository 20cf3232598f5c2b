//! Service configuration from environment variables.

use atelier_models::{ChatCompletionClient, UnsplashClient, openai_compat, unsplash};
use derive_getters::Getters;

/// Default bind address.
const DEFAULT_BIND: &str = "0.0.0.0:5000";
/// Default chat model when `ATELIER_CHAT_MODEL` is unset.
const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Placeholder credential values shipped in sample configs; treated as
/// absent so a copied template never reaches a remote API.
const OPENAI_KEY_SENTINEL: &str = "your-openai-api-key-here";
const UNSPLASH_KEY_SENTINEL: &str = "your-unsplash-access-key";

/// Immutable service configuration, fixed at process start.
///
/// Reads:
/// - `OPENAI_API_KEY` (optional) - absence disables remote chat generation
/// - `OPENAI_CHAT_URL` (optional) - chat completions endpoint override
/// - `ATELIER_CHAT_MODEL` (optional, default "gpt-3.5-turbo")
/// - `UNSPLASH_ACCESS_KEY` (optional) - absence disables photo search
/// - `UNSPLASH_BASE_URL` (optional) - Unsplash endpoint override
/// - `ATELIER_BIND` (optional, default "0.0.0.0:5000")
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ServiceConfig {
    /// Text-generation credential; `None` forces the local fallback path
    openai_api_key: Option<String>,
    /// Chat completions endpoint
    chat_url: String,
    /// Model requested from the chat endpoint
    chat_model: String,
    /// Photo-search credential; `None` forces placeholder rendering
    unsplash_access_key: Option<String>,
    /// Unsplash API base URL
    unsplash_base_url: String,
    /// Address the HTTP server binds to
    bind: String,
}

impl ServiceConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Every variable is optional; a missing credential disables that
    /// remote path rather than failing startup.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: credential("OPENAI_API_KEY", OPENAI_KEY_SENTINEL),
            chat_url: std::env::var("OPENAI_CHAT_URL")
                .unwrap_or_else(|_| openai_compat::DEFAULT_CHAT_URL.to_string()),
            chat_model: std::env::var("ATELIER_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            unsplash_access_key: credential("UNSPLASH_ACCESS_KEY", UNSPLASH_KEY_SENTINEL),
            unsplash_base_url: std::env::var("UNSPLASH_BASE_URL")
                .unwrap_or_else(|_| unsplash::DEFAULT_BASE_URL.to_string()),
            bind: std::env::var("ATELIER_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
        }
    }

    /// Chat client for the configured credential, if any.
    pub fn chat_client(&self) -> Option<ChatCompletionClient> {
        self.openai_api_key.as_ref().map(|key| {
            ChatCompletionClient::with_url(key.clone(), self.chat_model.clone(), self.chat_url.clone())
        })
    }

    /// Unsplash client for the configured credential, if any.
    pub fn unsplash_client(&self) -> Option<UnsplashClient> {
        self.unsplash_access_key.as_ref().map(|key| {
            UnsplashClient::with_base_url(key.clone(), self.unsplash_base_url.clone())
        })
    }
}

/// Reads a credential variable, filtering empty and sentinel values.
fn credential(var: &str, sentinel: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty() && value != sentinel)
}
