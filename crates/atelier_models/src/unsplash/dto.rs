//! Data transfer objects for the Unsplash search API.

use derive_getters::Getters;
use serde::Deserialize;

/// Response to a photo search query.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct SearchPhotosResponse {
    /// Matching photos, best match first
    #[serde(default)]
    results: Vec<PhotoSummary>,
}

impl SearchPhotosResponse {
    /// The "regular"-resolution URL of the best match, if any.
    pub fn first_regular_url(&self) -> Option<&str> {
        self.results
            .first()
            .map(|photo| photo.urls().regular().as_str())
    }
}

/// A single photo in a search result.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct PhotoSummary {
    /// Photo identifier
    #[serde(default)]
    id: Option<String>,
    /// Alt description supplied by the photographer
    #[serde(default)]
    alt_description: Option<String>,
    /// Hosted renditions of the photo
    urls: PhotoUrls,
}

/// Hosted renditions at the standard Unsplash resolutions.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct PhotoUrls {
    /// Regular-resolution rendition (the one served to clients)
    regular: String,
    /// Full-resolution rendition
    #[serde(default)]
    full: Option<String>,
    /// Small rendition
    #[serde(default)]
    small: Option<String>,
}

/// Errors from the Unsplash API.
#[derive(Debug, Clone, derive_more::Display)]
pub enum UnsplashError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Failed to parse response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
}

impl std::error::Error for UnsplashError {}
