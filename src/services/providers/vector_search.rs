/// Vector search provider implementation
///
/// Talks to the self-hosted semantic search sidecar. Unlike the generative
/// providers, this service returns structured JSON directly, so responses are
/// deserialized into a typed envelope instead of going through the
/// free-text recommendation parser.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ProviderError, ProviderResult},
    models::{ContentType, Recommendation},
};

use super::RecommendationProvider;

const TOP_K: u32 = 5;
const REQUEST_CONTENT_TYPE: &str = "Movie";

#[derive(Serialize)]
struct VectorSearchRequest<'a> {
    prompt: &'a str,
    top_k: u32,
    content_type: &'a str,
}

#[derive(Deserialize)]
struct VectorSearchResponse {
    #[serde(default)]
    recommendations: Vec<VectorSearchItem>,
}

#[derive(Deserialize)]
struct VectorSearchItem {
    title: String,
    description: Option<String>,
    similarity_score: Option<f64>,
    content_type: Option<String>,
}

pub struct VectorSearchProvider {
    http_client: HttpClient,
    api_url: String,
    timeout: Duration,
}

impl VectorSearchProvider {
    pub fn new(api_url: String, timeout_secs: u64) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// The sidecar catalogs movies and YouTube clips only.
fn map_content_type(label: Option<&str>) -> ContentType {
    match label {
        Some("YouTube Clips") => ContentType::YouTubeVideo,
        _ => ContentType::Movie,
    }
}

fn synthesize_reason(similarity_score: Option<f64>, mood: &str) -> String {
    let score = match similarity_score {
        Some(value) => format!("{:.2}", value),
        None => "N/A".to_string(),
    };
    format!(
        "Similarity score: {}. This movie matches your preference for \"{}\".",
        score, mood
    )
}

fn convert_item(item: VectorSearchItem, mood: &str) -> Recommendation {
    let reason = synthesize_reason(item.similarity_score, mood);
    Recommendation {
        title: item.title,
        content_type: map_content_type(item.content_type.as_deref()),
        description: item.description.unwrap_or_default(),
        reason,
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for VectorSearchProvider {
    async fn generate(&self, mood: &str) -> ProviderResult<Vec<Recommendation>> {
        let request = VectorSearchRequest {
            prompt: mood,
            top_k: TOP_K,
            content_type: REQUEST_CONTENT_TYPE,
        };

        let response = self
            .http_client
            .post(format!("{}/recommend", self.api_url))
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                status,
                format!("Vector search returned status {}: {}", status, body),
            ));
        }

        let envelope: VectorSearchResponse = response.json().await.map_err(|err| {
            ProviderError::from_decode(&err, format!("Vector search response: {}", err))
        })?;

        if envelope.recommendations.is_empty() {
            return Err(ProviderError::EmptyResult(
                "Vector search returned no recommendations".to_string(),
            ));
        }

        let recommendations: Vec<Recommendation> = envelope
            .recommendations
            .into_iter()
            .map(|item| convert_item(item, mood))
            .collect();

        tracing::info!(
            provider = "vector_search",
            count = recommendations.len(),
            "Vector search returned recommendations"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "vector_search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_content_type_youtube_clips() {
        assert_eq!(
            map_content_type(Some("YouTube Clips")),
            ContentType::YouTubeVideo
        );
    }

    #[test]
    fn test_map_content_type_defaults_to_movie() {
        assert_eq!(map_content_type(Some("Movies")), ContentType::Movie);
        assert_eq!(map_content_type(None), ContentType::Movie);
    }

    #[test]
    fn test_synthesize_reason_with_score() {
        let reason = synthesize_reason(Some(0.8731), "relaxed");
        assert_eq!(
            reason,
            "Similarity score: 0.87. This movie matches your preference for \"relaxed\"."
        );
    }

    #[test]
    fn test_synthesize_reason_without_score() {
        let reason = synthesize_reason(None, "tense");
        assert!(reason.starts_with("Similarity score: N/A."));
    }

    #[test]
    fn test_convert_item_fills_defaults() {
        let item = VectorSearchItem {
            title: "Blade Runner".to_string(),
            description: None,
            similarity_score: None,
            content_type: None,
        };

        let recommendation = convert_item(item, "moody");
        assert_eq!(recommendation.title, "Blade Runner");
        assert_eq!(recommendation.content_type, ContentType::Movie);
        assert_eq!(recommendation.description, "");
        assert!(recommendation.reason.contains("moody"));
    }

    #[test]
    fn test_response_envelope_deserializes() {
        let body = r#"{
            "recommendations": [
                {"title": "Arrival", "description": "First contact drama.", "similarity_score": 0.91, "content_type": "Movies"},
                {"title": "Film Analysis Deep Dives", "content_type": "YouTube Clips"}
            ]
        }"#;

        let envelope: VectorSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.recommendations.len(), 2);
        assert_eq!(envelope.recommendations[0].title, "Arrival");
        assert_eq!(envelope.recommendations[1].similarity_score, None);
    }

    #[test]
    fn test_missing_recommendations_key_defaults_empty() {
        let envelope: VectorSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_stalled_body_classifies_as_timeout() {
        use tokio::io::AsyncWriteExt;

        // Headers arrive promptly but the advertised body never completes,
        // so the request timeout fires during the body read.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let (mut socket, _) = match listener.accept().await {
                Ok(connection) => connection,
                Err(_) => return,
            };
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 1000\r\n\r\n{\"recommendations\":",
                )
                .await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let provider = VectorSearchProvider::new(address, 1);
        let result = provider.generate("adrift").await;

        assert!(matches!(result, Err(ProviderError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_unparseable_body_classifies_as_malformed() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recommend"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = VectorSearchProvider::new(server.uri(), 1);
        let result = provider.generate("adrift").await;

        assert!(matches!(result, Err(ProviderError::MalformedResponse(_))));
    }
}
