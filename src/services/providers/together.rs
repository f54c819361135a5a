/// Together AI provider implementation
///
/// Second chat-completion backend. Same OpenAI-compatible wire contract as
/// Groq, pointed at Together's hosted Llama 3 deployment.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{ProviderError, ProviderResult},
    models::{ChatCompletionRequest, ChatCompletionResponse, Recommendation},
    services::parser,
};

use super::{build_prompt, RecommendationProvider};

const API_URL: &str = "https://api.together.xyz/v1/chat/completions";
const MODEL: &str = "meta-llama/Llama-3-8b-chat-hf";

pub struct TogetherProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    timeout: Duration,
}

impl TogetherProvider {
    pub fn new(api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for TogetherProvider {
    async fn generate(&self, mood: &str) -> ProviderResult<Vec<Recommendation>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            ProviderError::ConfigurationMissing("Together API key not configured".to_string())
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
                format!("Together API returned status {}: {}", status, body),
            ));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|err| {
            ProviderError::from_decode(&err, format!("Together API response: {}", err))
        })?;

        let content = completion.into_content().ok_or_else(|| {
            ProviderError::MalformedResponse(
                "Together API response contained no message content".to_string(),
            )
        })?;

        let recommendations = parser::parse_recommendation_text(&content)?;

        tracing::info!(
            provider = "together",
            model = MODEL,
            count = recommendations.len(),
            "Together returned recommendations"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "together"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let provider = TogetherProvider::new(None, 10);

        let result = provider.generate("restless").await;
        assert!(matches!(
            result,
            Err(ProviderError::ConfigurationMissing(_))
        ));
    }
}
