/// Recommendation provider abstraction
///
/// This module provides a pluggable architecture for external recommendation
/// sources (the vector search sidecar, hosted chat-completion APIs, raw
/// text-generation inference). Each provider hides its own request shape,
/// response envelope, and failure quirks behind one uniform contract, so the
/// orchestrator never needs to know which vendor it is talking to.
use std::sync::Arc;

use crate::{
    config::{Config, ProviderKind},
    error::ProviderResult,
    models::Recommendation,
};

pub mod groq;
pub mod hugging_face;
pub mod openai;
pub mod together;
pub mod vector_search;

pub use groq::GroqProvider;
pub use hugging_face::HuggingFaceProvider;
pub use openai::OpenAiProvider;
pub use together::TogetherProvider;
pub use vector_search::VectorSearchProvider;

/// Trait for recommendation providers
///
/// One `generate` call is one orchestrator-level attempt: it performs its
/// network I/O, normalizes the response, and classifies any failure. Adapters
/// may try multiple backing models internally, but never retry beyond a
/// single invocation, and never mutate shared state.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Generate recommendations for the given mood
    ///
    /// Returns a normalized, non-empty recommendation list or a classified
    /// error. Adapters with a required credential check it before any
    /// network call and fail fast with `ConfigurationMissing`.
    async fn generate(&self, mood: &str) -> ProviderResult<Vec<Recommendation>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the instruction prompt shared by the generative providers.
pub fn build_prompt(mood: &str) -> String {
    format!(
        "Based on the user's mood: \"{}\", suggest 3-5 entertainment options.\n\
         Mix of Movies, TV Shows, and YouTube video topics.\n\
         For each, provide a title, type (Movie, TV Show, or YouTube Video), a brief description, and a reason why it fits the mood.\n\
         Return ONLY a JSON object with a key \"recommendations\" containing an array of objects with keys: title, type, description, reason.\n\
         Example: {{ \"recommendations\": [{{\"title\": \"The Office\", \"type\": \"TV Show\", \"description\": \"A mockumentary sitcom...\", \"reason\": \"It's lighthearted and funny...\"}}] }}",
        mood
    )
}

/// Builds the ordered list of enabled provider adapters from configuration.
///
/// This is the single place where configuration becomes a provider chain:
/// disabled or unconfigured providers are excluded here, not skipped at call
/// time, so the orchestrator only ever sees adapters that are ready to try.
pub fn build_providers(config: &Config) -> Vec<Arc<dyn RecommendationProvider>> {
    let mut providers: Vec<Arc<dyn RecommendationProvider>> = Vec::new();

    for kind in &config.provider_order {
        match kind {
            ProviderKind::VectorSearch => {
                if config.disable_vector_search {
                    tracing::info!(
                        provider = "vector_search",
                        "Provider disabled by configuration"
                    );
                    continue;
                }
                providers.push(Arc::new(VectorSearchProvider::new(
                    config.sanitized_vector_search_url(),
                    config.vector_search_timeout_secs,
                )));
            }
            ProviderKind::Groq => {
                if config.groq_api_key.is_none() {
                    tracing::info!(provider = "groq", "No API key set, provider excluded");
                    continue;
                }
                providers.push(Arc::new(GroqProvider::new(
                    config.groq_api_key.clone(),
                    config.groq_timeout_secs,
                )));
            }
            ProviderKind::Together => {
                if config.together_api_key.is_none() {
                    tracing::info!(provider = "together", "No API key set, provider excluded");
                    continue;
                }
                providers.push(Arc::new(TogetherProvider::new(
                    config.together_api_key.clone(),
                    config.together_timeout_secs,
                )));
            }
            ProviderKind::OpenAi => {
                if config.openai_api_key.is_none() {
                    tracing::info!(provider = "openai", "No API key set, provider excluded");
                    continue;
                }
                providers.push(Arc::new(OpenAiProvider::new(
                    config.openai_api_key.clone(),
                    config.openai_base_url.clone(),
                    config.openai_timeout_secs,
                )));
            }
            ProviderKind::HuggingFace => {
                // Works without a key for some hosted models, so it is
                // always constructed.
                providers.push(Arc::new(HuggingFaceProvider::new(
                    config.huggingface_api_key.clone(),
                    config.huggingface_api_url.clone(),
                    config.huggingface_timeout_secs,
                )));
            }
        }
    }

    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        serde_json::from_str("{}").unwrap()
    }

    fn provider_names(providers: &[Arc<dyn RecommendationProvider>]) -> Vec<&'static str> {
        providers.iter().map(|provider| provider.name()).collect()
    }

    #[test]
    fn test_build_providers_without_keys() {
        // Only the keyless providers survive: vector search and Hugging Face.
        let providers = build_providers(&base_config());
        assert_eq!(provider_names(&providers), vec!["vector_search", "hugging_face"]);
    }

    #[test]
    fn test_build_providers_with_all_keys() {
        let mut config = base_config();
        config.groq_api_key = Some("gsk_test".to_string());
        config.together_api_key = Some("together_test".to_string());
        config.openai_api_key = Some("sk-test".to_string());

        let providers = build_providers(&config);
        assert_eq!(
            provider_names(&providers),
            vec!["vector_search", "groq", "together", "openai", "hugging_face"]
        );
    }

    #[test]
    fn test_build_providers_respects_disable_flag() {
        let mut config = base_config();
        config.disable_vector_search = true;

        let providers = build_providers(&config);
        assert_eq!(provider_names(&providers), vec!["hugging_face"]);
    }

    #[test]
    fn test_build_providers_respects_custom_order() {
        let mut config = base_config();
        config.groq_api_key = Some("gsk_test".to_string());
        config.provider_order = vec![ProviderKind::Groq, ProviderKind::VectorSearch];

        let providers = build_providers(&config);
        assert_eq!(provider_names(&providers), vec!["groq", "vector_search"]);
    }

    #[test]
    fn test_prompt_includes_mood_and_contract() {
        let prompt = build_prompt("cozy autumn evening");

        assert!(prompt.contains("\"cozy autumn evening\""));
        assert!(prompt.contains("3-5 entertainment options"));
        assert!(prompt.contains("\"recommendations\""));
        assert!(prompt.contains("title, type, description, reason"));
    }
}
