/// OpenAI provider implementation
///
/// Last of the chat-completion backends. The base URL is configurable so the
/// adapter also works against OpenAI-compatible proxies.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{ProviderError, ProviderResult},
    models::{ChatCompletionRequest, ChatCompletionResponse, Recommendation},
    services::parser,
};

use super::{build_prompt, RecommendationProvider};

const MODEL: &str = "gpt-4o";

pub struct OpenAiProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>, api_url: String, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for OpenAiProvider {
    async fn generate(&self, mood: &str) -> ProviderResult<Vec<Recommendation>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            ProviderError::ConfigurationMissing("OpenAI API key not configured".to_string())
        })?;

        let request = ChatCompletionRequest::json_object(MODEL, build_prompt(mood));

        let response = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.api_url))
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
                format!("OpenAI API returned status {}: {}", status, body),
            ));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|err| {
            ProviderError::from_decode(&err, format!("OpenAI API response: {}", err))
        })?;

        let content = completion.into_content().ok_or_else(|| {
            ProviderError::MalformedResponse(
                "OpenAI API response contained no message content".to_string(),
            )
        })?;

        let recommendations = parser::parse_recommendation_text(&content)?;

        tracing::info!(
            provider = "openai",
            model = MODEL,
            count = recommendations.len(),
            "OpenAI returned recommendations"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
