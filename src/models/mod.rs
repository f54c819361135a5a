use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical content category for a recommendation
///
/// These three variants are the only valid values a `Recommendation` may
/// carry; provider-specific labels are coerced through `from_label` before
/// anything crosses the orchestration boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentType {
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
    #[serde(rename = "YouTube Video")]
    YouTubeVideo,
}

impl ContentType {
    /// Lenient conversion from a provider-supplied type label
    ///
    /// Generative providers are prompted for the exact wire vocabulary but
    /// routinely answer with variations. Unrecognized labels fall back to
    /// `Movie` rather than failing the item.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "movie" | "film" => ContentType::Movie,
            "tv show" | "tv_show" | "tvshow" | "series" | "tv series" | "show" => {
                ContentType::TvShow
            }
            "youtube video" | "youtube_video" | "youtube" | "video" => ContentType::YouTubeVideo,
            _ => ContentType::Movie,
        }
    }

    /// Wire name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
            ContentType::YouTubeVideo => "YouTube Video",
        }
    }
}

/// A single entertainment recommendation returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reason: String,
}

/// One stored orchestration result: the mood asked and what came back
///
/// Created once per successful recommendation call and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRequest {
    pub id: Uuid,
    pub mood: String,
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
}

impl MoodRequest {
    /// Creates a history entry with a fresh id and the current timestamp
    pub fn new(mood: String, recommendations: Vec<Recommendation>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood,
            recommendations,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Chat Completions Wire Types
// ============================================================================
// Shared by the OpenAI-compatible providers (Groq, Together AI, OpenAI).

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ChatCompletionRequest {
    /// Builds a single-user-message request that demands a JSON object reply
    pub fn json_object(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Extracts the assistant message content from the first choice, if any
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_wire_vocabulary() {
        assert_eq!(
            serde_json::to_string(&ContentType::Movie).unwrap(),
            r#""Movie""#
        );
        assert_eq!(
            serde_json::to_string(&ContentType::TvShow).unwrap(),
            r#""TV Show""#
        );
        assert_eq!(
            serde_json::to_string(&ContentType::YouTubeVideo).unwrap(),
            r#""YouTube Video""#
        );
    }

    #[test]
    fn test_as_str_matches_wire_vocabulary() {
        assert_eq!(ContentType::Movie.as_str(), "Movie");
        assert_eq!(ContentType::TvShow.as_str(), "TV Show");
        assert_eq!(ContentType::YouTubeVideo.as_str(), "YouTube Video");
    }

    #[test]
    fn test_from_label_canonical_names() {
        assert_eq!(ContentType::from_label("Movie"), ContentType::Movie);
        assert_eq!(ContentType::from_label("TV Show"), ContentType::TvShow);
        assert_eq!(
            ContentType::from_label("YouTube Video"),
            ContentType::YouTubeVideo
        );
    }

    #[test]
    fn test_from_label_common_variations() {
        assert_eq!(ContentType::from_label("tv_show"), ContentType::TvShow);
        assert_eq!(ContentType::from_label("Series"), ContentType::TvShow);
        assert_eq!(ContentType::from_label(" film "), ContentType::Movie);
        assert_eq!(ContentType::from_label("YOUTUBE"), ContentType::YouTubeVideo);
    }

    #[test]
    fn test_from_label_unknown_defaults_to_movie() {
        assert_eq!(ContentType::from_label("Podcast"), ContentType::Movie);
        assert_eq!(ContentType::from_label(""), ContentType::Movie);
    }

    #[test]
    fn test_recommendation_serializes_type_key() {
        let rec = Recommendation {
            title: "Stranger Things".to_string(),
            content_type: ContentType::TvShow,
            description: "Supernatural mystery set in the 1980s.".to_string(),
            reason: "Perfect blend of suspense and nostalgia.".to_string(),
        };

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["title"], "Stranger Things");
        assert_eq!(value["type"], "TV Show");
        assert_eq!(value["description"], "Supernatural mystery set in the 1980s.");
    }

    #[test]
    fn test_recommendation_deserializes_missing_optional_fields() {
        let rec: Recommendation =
            serde_json::from_str(r#"{"title": "Inception", "type": "Movie"}"#).unwrap();
        assert_eq!(rec.title, "Inception");
        assert_eq!(rec.content_type, ContentType::Movie);
        assert_eq!(rec.description, "");
        assert_eq!(rec.reason, "");
    }

    #[test]
    fn test_mood_request_new() {
        let request = MoodRequest::new("cozy evening".to_string(), vec![]);
        assert_eq!(request.mood, "cozy evening");
        assert!(request.recommendations.is_empty());
    }

    #[test]
    fn test_chat_completion_request_shape() {
        let request = ChatCompletionRequest::json_object("gpt-4o", "say hi".to_string());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "say hi");
        assert_eq!(value["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_chat_completion_response_content() {
        let json = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "{\"recommendations\": []}" } }
            ]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_content(),
            Some("{\"recommendations\": []}".to_string())
        );
    }

    #[test]
    fn test_chat_completion_response_without_choices() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.into_content(), None);
    }
}
