//! JSON request bodies for the HTTP surface.

use derive_getters::Getters;
use serde::Deserialize;

fn default_prompt() -> String {
    "AI generated image".to_string()
}

fn default_style() -> String {
    "realistic".to_string()
}

/// Body of `POST /chat`.
///
/// A missing `message` field behaves like an empty message: the handler
/// rejects both with the same client error.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ChatMessageRequest {
    /// The user's message
    #[serde(default)]
    message: String,
}

/// Body of `POST /generate_image`. Both fields are optional.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GenerateImageRequest {
    /// Free-text description of the desired image
    #[serde(default = "default_prompt")]
    prompt: String,
    /// Style tag; unrecognized values render the default decoration
    #[serde(default = "default_style")]
    style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_defaults_to_empty() {
        let body: ChatMessageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), "");
    }

    #[test]
    fn image_request_defaults_apply() {
        let body: GenerateImageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(body.prompt(), "AI generated image");
        assert_eq!(body.style(), "realistic");

        let body: GenerateImageRequest =
            serde_json::from_str(r#"{"prompt": "a cat", "style": "anime"}"#).unwrap();
        assert_eq!(body.prompt(), "a cat");
        assert_eq!(body.style(), "anime");
    }
}
