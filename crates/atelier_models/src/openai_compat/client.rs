//! Client for OpenAI-compatible chat completion APIs.

use crate::openai_compat::{ChatResponse, DEFAULT_CHAT_URL, OpenAICompatError, conversions};
use atelier_core::{GenerateRequest, GenerateResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Bound on remote call latency; a slow provider falls back locally instead
/// of stalling the request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for any OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
}

impl ChatCompletionClient {
    /// Creates a new client against the default OpenAI endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier used when a request carries no override
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_url(api_key, model, DEFAULT_CHAT_URL)
    }

    /// Creates a new client against a specific chat completions URL.
    ///
    /// Useful for compatible providers and for pointing tests at a local
    /// mock server.
    pub fn with_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Valid HTTP client");
        let model = model.into();
        let url = url.into();

        debug!(model = %model, url = %url, "Created chat completion client");

        Self {
            client,
            api_key: api_key.into(),
            model,
            url,
        }
    }

    /// Generates a response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, OpenAICompatError> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            model = %self.model,
            message_count = chat_request.messages().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                OpenAICompatError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OpenAICompatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OpenAICompatError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }

    /// Returns the configured model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}
