//! Unsplash photo search integration.

mod client;
mod dto;

pub use client::UnsplashClient;
pub use dto::{PhotoSummary, PhotoUrls, SearchPhotosResponse, UnsplashError};

/// Default Unsplash API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";
