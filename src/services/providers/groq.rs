/// Groq provider implementation
///
/// Calls Groq's OpenAI-compatible chat completions endpoint and extracts
/// recommendations from the model's reply text. Requires an API key; without
/// one the adapter fails fast so the orchestrator can move on.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{ProviderError, ProviderResult},
    models::{ChatCompletionRequest, ChatCompletionResponse, Recommendation},
    services::parser,
};

use super::{build_prompt, RecommendationProvider};

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama-3.1-8b-instant";

pub struct GroqProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    timeout: Duration,
}

impl GroqProvider {
    pub fn new(api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for GroqProvider {
    async fn generate(&self, mood: &str) -> ProviderResult<Vec<Recommendation>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            ProviderError::ConfigurationMissing("Groq API key not configured".to_string())
        })?;

        let request = ChatCompletionRequest::json_object(MODEL, build_prompt(mood));

        let response = self
            .http_client
            .post(API_URL)
            .bearer_auth(api_key)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                status,
                format!("Groq API returned status {}: {}", status, body),
            ));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|err| {
            ProviderError::from_decode(&err, format!("Groq API response: {}", err))
        })?;

        let content = completion.into_content().ok_or_else(|| {
            ProviderError::MalformedResponse(
                "Groq API response contained no message content".to_string(),
            )
        })?;

        let recommendations = parser::parse_recommendation_text(&content)?;

        tracing::info!(
            provider = "groq",
            model = MODEL,
            count = recommendations.len(),
            "Groq returned recommendations"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
