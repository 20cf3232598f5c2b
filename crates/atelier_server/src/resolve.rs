//! Image source resolution: remote photo search first, placeholder fallback.

use atelier_models::UnsplashClient;
use atelier_render::render_placeholder;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Advisory note attached to placeholder results.
const PLACEHOLDER_NOTE: &str =
    "This is a placeholder image. Add your own API keys for real image generation.";

/// Where a resolved image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSourceKind {
    /// A hosted photo found through the search API
    Unsplash,
    /// A locally rendered placeholder
    Placeholder,
}

/// A resolved image plus the request it answers.
#[derive(Debug, Clone, Getters)]
pub struct ResolvedImage {
    /// Remote URL or self-contained data URI
    image_url: String,
    /// Origin of the image
    source: ImageSourceKind,
    /// Prompt echoed back to the client
    prompt: String,
    /// Style tag echoed back to the client
    style: String,
    /// Advisory note for synthetic results
    note: Option<String>,
}

impl ResolvedImage {
    fn remote(url: impl Into<String>, prompt: &str, style: &str) -> Self {
        Self {
            image_url: url.into(),
            source: ImageSourceKind::Unsplash,
            prompt: prompt.to_string(),
            style: style.to_string(),
            note: None,
        }
    }

    fn placeholder(data_uri: String, prompt: &str, style: &str) -> Self {
        Self {
            image_url: data_uri,
            source: ImageSourceKind::Placeholder,
            prompt: prompt.to_string(),
            style: style.to_string(),
            note: Some(PLACEHOLDER_NOTE.to_string()),
        }
    }
}

/// Resolves images remotely when a search credential is configured, locally
/// otherwise.
pub struct ImageResolver {
    client: Option<UnsplashClient>,
}

impl ImageResolver {
    /// Creates a resolver; `None` disables the remote search path.
    pub fn new(client: Option<UnsplashClient>) -> Self {
        Self { client }
    }

    /// Resolves an image for the prompt and style tag.
    ///
    /// Every remote failure (missing credential, network error, malformed or
    /// empty response) is absorbed and answered with a placeholder, so
    /// resolution always succeeds.
    #[instrument(skip(self))]
    pub async fn resolve(&self, prompt: &str, style: &str) -> ResolvedImage {
        if let Some(client) = &self.client {
            match client.search_photos(prompt).await {
                Ok(response) => {
                    if let Some(url) = response.first_regular_url() {
                        debug!("Photo search produced a hosted image");
                        return ResolvedImage::remote(url, prompt, style);
                    }
                    debug!("Photo search returned no results, rendering placeholder");
                }
                Err(e) => {
                    warn!(error = %e, "Photo search failed, rendering placeholder");
                }
            }
        }

        ResolvedImage::placeholder(render_placeholder(prompt, style), prompt, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_credential_always_yields_a_placeholder() {
        let resolver = ImageResolver::new(None);
        let resolved = resolver.resolve("a cat", "anime").await;

        assert_eq!(*resolved.source(), ImageSourceKind::Placeholder);
        assert!(resolved.image_url().starts_with("data:image/png;base64,"));
        assert_eq!(resolved.prompt(), "a cat");
        assert_eq!(resolved.style(), "anime");
        assert_eq!(resolved.note().as_deref(), Some(PLACEHOLDER_NOTE));
    }

    #[test]
    fn source_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ImageSourceKind::Unsplash).unwrap(),
            "\"unsplash\""
        );
        assert_eq!(
            serde_json::to_string(&ImageSourceKind::Placeholder).unwrap(),
            "\"placeholder\""
        );
    }
}
