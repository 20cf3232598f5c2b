//! The canned-response knowledge base.
//!
//! Categorized fallback phrases used when no remote chat credential is
//! configured or a remote call fails. The knowledge base is immutable,
//! built once at startup, and shared by reference across requests.

use crate::Sampler;
use atelier_error::{AtelierResult, ConfigError};

/// Category name for greeting responses.
pub const GREETINGS: &str = "greetings";
/// Category name for capability responses.
pub const CAPABILITIES: &str = "capabilities";
/// Category name for generic fallback responses.
pub const FALLBACK: &str = "fallback";

/// A named, ordered list of candidate responses.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Category {
    /// Category name
    name: String,
    /// Candidate responses, in insertion order
    responses: Vec<String>,
}

impl Category {
    /// Creates a new category from a name and candidate responses.
    pub fn new(name: impl Into<String>, responses: Vec<String>) -> Self {
        Self {
            name: name.into(),
            responses,
        }
    }
}

/// Mapping from category name to candidate responses, in insertion order.
///
/// Invariant: every category holds at least one response. Construction
/// rejects violations so selection never has to handle an empty pool.
///
/// # Examples
///
/// ```
/// use atelier_core::KnowledgeBase;
///
/// let kb = KnowledgeBase::standard();
/// assert_eq!(kb.topics(), vec!["greetings", "capabilities", "fallback"]);
/// assert_eq!(kb.total_responses(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    categories: Vec<Category>,
}

impl KnowledgeBase {
    /// Creates a knowledge base from the given categories.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any category has no responses.
    pub fn new(categories: Vec<Category>) -> AtelierResult<Self> {
        for category in &categories {
            if category.responses().is_empty() {
                return Err(ConfigError::new(format!(
                    "knowledge base category '{}' has no responses",
                    category.name()
                ))
                .into());
            }
        }
        Ok(Self { categories })
    }

    /// The standard knowledge base shipped with the service.
    pub fn standard() -> Self {
        let categories = vec![
            Category::new(
                GREETINGS,
                vec![
                    "Hello! I'm your advanced AI assistant. How can I help you today?".to_string(),
                    "Hi there! I'm ready to assist you with any questions or tasks.".to_string(),
                    "Greetings! I'm here to help you with information, images, and more."
                        .to_string(),
                ],
            ),
            Category::new(
                CAPABILITIES,
                vec![
                    "I can answer questions on various topics, generate images, provide \
                     explanations, and assist with creative tasks."
                        .to_string(),
                    "My capabilities include natural language conversations, image generation \
                     based on descriptions, and providing detailed information on countless \
                     subjects."
                        .to_string(),
                    "I'm equipped to handle questions about science, technology, history, arts, \
                     and much more. I can also create visual content from text descriptions."
                        .to_string(),
                ],
            ),
            Category::new(
                FALLBACK,
                vec![
                    "That's an interesting question. While I process that, let me share some \
                     relevant information..."
                        .to_string(),
                    "I understand your query. Based on my knowledge, here's what I can tell \
                     you..."
                        .to_string(),
                    "Great question! Here's my analysis on that topic...".to_string(),
                ],
            ),
        ];
        Self::new(categories).expect("Valid standard knowledge base")
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Category names, in insertion order.
    pub fn topics(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name().as_str()).collect()
    }

    /// Total candidate responses across all categories.
    pub fn total_responses(&self) -> usize {
        self.categories.iter().map(|c| c.responses().len()).sum()
    }

    /// Picks a response from the named category via the given sampler.
    ///
    /// Returns `None` only for an unknown category name; known categories
    /// always yield a response because of the non-empty invariant.
    pub fn sample<'a>(&'a self, name: &str, sampler: &dyn Sampler) -> Option<&'a str> {
        let category = self.category(name)?;
        let index = sampler.pick_index(category.responses().len());
        category.responses().get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSampler(usize);

    impl Sampler for FixedSampler {
        fn pick_index(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    #[test]
    fn standard_holds_three_categories_of_three() {
        let kb = KnowledgeBase::standard();
        assert_eq!(kb.topics(), vec![GREETINGS, CAPABILITIES, FALLBACK]);
        assert_eq!(kb.total_responses(), 9);
        for topic in kb.topics() {
            assert_eq!(kb.category(topic).unwrap().responses().len(), 3);
        }
    }

    #[test]
    fn empty_category_is_rejected() {
        let result = KnowledgeBase::new(vec![Category::new("empty", vec![])]);
        assert!(result.is_err());
    }

    #[test]
    fn sample_is_exact_under_a_fixed_sampler() {
        let kb = KnowledgeBase::standard();
        let first = kb.sample(GREETINGS, &FixedSampler(0)).unwrap();
        assert_eq!(
            first,
            "Hello! I'm your advanced AI assistant. How can I help you today?"
        );
        let last = kb.sample(GREETINGS, &FixedSampler(2)).unwrap();
        assert!(last.starts_with("Greetings!"));
    }

    #[test]
    fn unknown_category_yields_none() {
        let kb = KnowledgeBase::standard();
        assert!(kb.sample("jokes", &FixedSampler(0)).is_none());
    }
}
