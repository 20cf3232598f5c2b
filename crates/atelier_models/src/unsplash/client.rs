//! Client for the Unsplash photo search API.

use crate::unsplash::{DEFAULT_BASE_URL, SearchPhotosResponse, UnsplashError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Bound on remote call latency; a slow search falls back to the local
/// placeholder instead of stalling the request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Unsplash photo search API.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    /// Creates a new client against the public Unsplash API.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self::with_base_url(access_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client against a specific base URL.
    ///
    /// Useful for pointing tests at a local mock server.
    pub fn with_base_url(access_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Valid HTTP client");
        let base_url = base_url.into();

        debug!(url = %base_url, "Created Unsplash client");

        Self {
            client,
            access_key: access_key.into(),
            base_url,
        }
    }

    /// Searches for a single landscape photo matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed. An empty result list is not an error; callers inspect the
    /// response.
    #[instrument(skip(self))]
    pub async fn search_photos(&self, query: &str) -> Result<SearchPhotosResponse, UnsplashError> {
        let url = format!("{}/search/photos", self.base_url);

        debug!(query = %query, "Searching Unsplash");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                UnsplashError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(UnsplashError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let search_response: SearchPhotosResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            UnsplashError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(
            results = search_response.results().len(),
            "Received search response"
        );

        Ok(search_response)
    }
}
