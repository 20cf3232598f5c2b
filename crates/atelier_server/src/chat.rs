//! Response selection: remote generation first, knowledge base fallback.

use atelier_core::{
    GenerateRequest, KnowledgeBase, Message, Sampler,
    knowledge::{CAPABILITIES, FALLBACK, GREETINGS},
};
use atelier_error::{AtelierResult, ConfigError};
use atelier_models::ChatCompletionClient;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// System instruction sent with every remote generation request.
const SYSTEM_INSTRUCTION: &str = "You are an advanced AI assistant that can answer any question \
                                  on any topic. Provide detailed, helpful, and accurate \
                                  information.";
/// Output budget for remote generation.
const MAX_RESPONSE_TOKENS: u32 = 500;
/// Sampling temperature for remote generation.
const SAMPLING_TEMPERATURE: f32 = 0.7;

/// Keywords that route a message to the greetings category.
const GREETING_KEYWORDS: [&str; 4] = ["hello", "hi", "hey", "greetings"];
/// Keywords that route a message to the capabilities category.
const CAPABILITY_KEYWORDS: [&str; 4] = ["can you", "what can", "capabilities", "abilities"];

/// Picks a response for a chat message.
///
/// When a chat client is configured, the remote path is tried first and any
/// failure is absorbed in favor of local selection, so callers never see a
/// remote-dependency error.
pub struct ResponseSelector {
    knowledge: Arc<KnowledgeBase>,
    client: Option<ChatCompletionClient>,
    sampler: Arc<dyn Sampler>,
}

impl ResponseSelector {
    /// Creates a selector over the given knowledge base.
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        client: Option<ChatCompletionClient>,
        sampler: Arc<dyn Sampler>,
    ) -> Self {
        Self {
            knowledge,
            client,
            sampler,
        }
    }

    /// Selects a response for a non-empty message.
    ///
    /// # Errors
    ///
    /// Only configuration mistakes surface here (a knowledge base missing a
    /// routing category); remote failures fall back to local selection.
    #[instrument(skip(self, message))]
    pub async fn select(&self, message: &str) -> AtelierResult<String> {
        if let Some(client) = &self.client {
            let request = GenerateRequest::builder()
                .messages(vec![
                    Message::system(SYSTEM_INSTRUCTION),
                    Message::user(message),
                ])
                .max_tokens(Some(MAX_RESPONSE_TOKENS))
                .temperature(Some(SAMPLING_TEMPERATURE))
                .build()
                .expect("Valid generate request");

            match client.generate(&request).await {
                Ok(response) => {
                    debug!("Remote chat generation succeeded");
                    return Ok(response.text().clone());
                }
                Err(e) => {
                    warn!(error = %e, "Remote chat generation failed, using knowledge base");
                }
            }
        }

        self.local_reply(message)
    }

    /// Local selection over the knowledge base.
    ///
    /// Keyword routing is case-insensitive substring matching; messages
    /// outside both keyword sets get a fallback lead-in composed with a
    /// sentence echoing the original message.
    pub fn local_reply(&self, message: &str) -> AtelierResult<String> {
        let lowered = message.to_lowercase();

        if GREETING_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return self.pick(GREETINGS);
        }
        if CAPABILITY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return self.pick(CAPABILITIES);
        }

        let lead = self.pick(FALLBACK)?;
        Ok(format!(
            "{} Your question about '{}' is quite interesting. Based on general knowledge, I'd \
             suggest researching this topic further for the most current information.",
            lead, message
        ))
    }

    fn pick(&self, category: &str) -> AtelierResult<String> {
        self.knowledge
            .sample(category, self.sampler.as_ref())
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::new(format!("knowledge base category '{}' is missing", category))
                    .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::ThreadRngSampler;

    struct FixedSampler(usize);

    impl Sampler for FixedSampler {
        fn pick_index(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn selector(sampler: Arc<dyn Sampler>) -> ResponseSelector {
        ResponseSelector::new(Arc::new(KnowledgeBase::standard()), None, sampler)
    }

    fn category_responses(category: &str) -> Vec<String> {
        KnowledgeBase::standard()
            .category(category)
            .unwrap()
            .responses()
            .clone()
    }

    #[test]
    fn greeting_keywords_route_to_greetings() {
        let selector = selector(Arc::new(ThreadRngSampler));
        let greetings = category_responses(GREETINGS);

        for message in ["hello", "Hey there!", "GREETINGS, program", "oh hi"] {
            let reply = selector.local_reply(message).unwrap();
            assert!(greetings.contains(&reply), "unexpected reply: {reply}");
        }
    }

    #[test]
    fn capability_keywords_route_to_capabilities() {
        let selector = selector(Arc::new(ThreadRngSampler));
        let capabilities = category_responses(CAPABILITIES);

        for message in [
            "What can you do?",
            "tell me your capabilities",
            "Can you help me?",
            "list your abilities",
        ] {
            let reply = selector.local_reply(message).unwrap();
            assert!(capabilities.contains(&reply), "unexpected reply: {reply}");
        }
    }

    #[test]
    fn other_messages_compose_a_fallback_echo() {
        let selector = selector(Arc::new(ThreadRngSampler));
        let fallbacks = category_responses(FALLBACK);

        let message = "Tell me about quantum computing";
        let reply = selector.local_reply(message).unwrap();

        assert!(reply.contains(message));
        assert!(fallbacks.iter().any(|lead| reply.starts_with(lead)));
    }

    #[test]
    fn fixed_sampler_makes_selection_exact() {
        let selector = selector(Arc::new(FixedSampler(1)));
        let reply = selector.local_reply("hello").unwrap();
        assert_eq!(
            reply,
            "Hi there! I'm ready to assist you with any questions or tasks."
        );
    }

    #[test]
    fn original_casing_survives_in_the_echo() {
        let selector = selector(Arc::new(FixedSampler(0)));
        let reply = selector.local_reply("Explain RUST lifetimes").unwrap();
        assert!(reply.contains("'Explain RUST lifetimes'"));
    }

    #[tokio::test]
    async fn select_without_a_client_uses_local_selection() {
        let selector = selector(Arc::new(FixedSampler(0)));
        let reply = selector.select("hello").await.unwrap();
        assert_eq!(
            reply,
            "Hello! I'm your advanced AI assistant. How can I help you today?"
        );
    }

    #[test]
    fn missing_category_surfaces_a_config_error() {
        let knowledge = KnowledgeBase::new(vec![]).unwrap();
        let selector = ResponseSelector::new(
            Arc::new(knowledge),
            None,
            Arc::new(FixedSampler(0)),
        );
        assert!(selector.local_reply("hello").is_err());
    }
}
