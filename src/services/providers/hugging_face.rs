/// Hugging Face inference provider implementation
///
/// Calls the hosted inference API's raw text-generation endpoint. The
/// response envelope varies by model (array of generations, bare string, or
/// a single object), and under-demand models return a loading error with a
/// 200 status, so extraction is defensive at every step. Several backing
/// models are tried within one call before the adapter gives up.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{ProviderError, ProviderResult},
    models::Recommendation,
    services::parser,
};

use super::{build_prompt, RecommendationProvider};

const MODELS: [&str; 3] = [
    "microsoft/Phi-3-mini-4k-instruct",
    "Qwen/Qwen2.5-1.5B-Instruct",
    "meta-llama/Llama-3.2-3B-Instruct",
];

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

pub struct HuggingFaceProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl HuggingFaceProvider {
    pub fn new(api_key: Option<String>, api_url: String, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    async fn try_model(&self, model: &str, prompt: &str) -> ProviderResult<Vec<Recommendation>> {
        let mut request = self
            .http_client
            .post(format!("{}/models/{}", self.api_url, model))
            .json(&InferenceRequest { inputs: prompt })
            .timeout(self.timeout);

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                status,
                format!("Hugging Face model {} returned status {}: {}", model, status, body),
            ));
        }

        let body: Value = response.json().await.map_err(|err| {
            ProviderError::from_decode(&err, format!("Hugging Face response: {}", err))
        })?;

        let content = content_from_body(model, &body)?;
        parser::parse_recommendation_text(&content)
    }
}

fn content_from_body(model: &str, body: &Value) -> ProviderResult<String> {
    // Models that are cold or over capacity report an error field alongside
    // a 200 status.
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Err(ProviderError::TransientUnavailable(format!(
            "Hugging Face model {}: {}",
            model, error
        )));
    }

    extract_generated_text(body).ok_or_else(|| {
        ProviderError::MalformedResponse(format!(
            "Hugging Face model {} returned an unrecognized response shape",
            model
        ))
    })
}

fn extract_generated_text(body: &Value) -> Option<String> {
    match body {
        Value::Array(items) => {
            let first = items.first()?;
            match first.get("generated_text").and_then(Value::as_str) {
                Some(text) => Some(text.to_string()),
                None => Some(first.to_string()),
            }
        }
        Value::String(text) => Some(text.clone()),
        Value::Object(_) => match body.get("generated_text").and_then(Value::as_str) {
            Some(text) => Some(text.to_string()),
            None => Some(body.to_string()),
        },
        _ => None,
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HuggingFaceProvider {
    async fn generate(&self, mood: &str) -> ProviderResult<Vec<Recommendation>> {
        let prompt = build_prompt(mood);
        let mut last_error =
            ProviderError::EndpointUnavailable("No backing models configured".to_string());

        for model in MODELS {
            match self.try_model(model, &prompt).await {
                Ok(recommendations) => {
                    tracing::info!(
                        provider = "hugging_face",
                        model = model,
                        count = recommendations.len(),
                        "Hugging Face returned recommendations"
                    );
                    return Ok(recommendations);
                }
                // The same credential and time budget would fail the
                // remaining models too.
                Err(err @ ProviderError::AuthenticationInvalid(_))
                | Err(err @ ProviderError::Timeout(_)) => return Err(err),
                Err(err) => {
                    tracing::warn!(
                        provider = "hugging_face",
                        model = model,
                        error = %err,
                        "Model attempt failed, trying next"
                    );
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    fn name(&self) -> &'static str {
        "hugging_face"
    }
}
