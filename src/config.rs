use serde::Deserialize;

/// Known recommendation providers, named as they appear in `PROVIDER_ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    VectorSearch,
    Groq,
    Together,
    #[serde(rename = "openai")]
    OpenAi,
    HuggingFace,
}

/// Application configuration loaded from environment variables
///
/// Resolved once at startup and never mutated afterwards. Whether a provider
/// ends up in the orchestration chain is decided here: a missing key or a
/// disable flag means the adapter is never constructed at all.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Vector search sidecar base URL
    #[serde(default = "default_vector_search_url")]
    pub vector_search_url: String,

    /// Force-disable the vector search provider
    #[serde(default)]
    pub disable_vector_search: bool,

    /// Vector search request timeout in seconds
    #[serde(default = "default_vector_search_timeout_secs")]
    pub vector_search_timeout_secs: u64,

    /// Groq API key
    pub groq_api_key: Option<String>,

    /// Groq request timeout in seconds
    #[serde(default = "default_groq_timeout_secs")]
    pub groq_timeout_secs: u64,

    /// Together AI API key
    pub together_api_key: Option<String>,

    /// Together AI request timeout in seconds
    #[serde(default = "default_together_timeout_secs")]
    pub together_timeout_secs: u64,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// OpenAI request timeout in seconds
    #[serde(default = "default_openai_timeout_secs")]
    pub openai_timeout_secs: u64,

    /// Hugging Face API key (optional; some hosted models accept anonymous calls)
    pub huggingface_api_key: Option<String>,

    /// Hugging Face inference API base URL
    #[serde(default = "default_huggingface_api_url")]
    pub huggingface_api_url: String,

    /// Hugging Face request timeout in seconds, applied per backing model
    #[serde(default = "default_huggingface_timeout_secs")]
    pub huggingface_timeout_secs: u64,

    /// Provider priority order, comma-separated (e.g. "vector_search,groq")
    #[serde(default = "default_provider_order")]
    pub provider_order: Vec<ProviderKind>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_vector_search_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_vector_search_timeout_secs() -> u64 {
    5
}

fn default_groq_timeout_secs() -> u64 {
    10
}

fn default_together_timeout_secs() -> u64 {
    10
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_openai_timeout_secs() -> u64 {
    20
}

fn default_huggingface_api_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_huggingface_timeout_secs() -> u64 {
    15
}

fn default_provider_order() -> Vec<ProviderKind> {
    // Curated in-domain data first, chat providers by latency, raw
    // text generation last among the real providers.
    vec![
        ProviderKind::VectorSearch,
        ProviderKind::Groq,
        ProviderKind::Together,
        ProviderKind::OpenAi,
        ProviderKind::HuggingFace,
    ]
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Vector search base URL cleaned of common env-var mistakes
    ///
    /// Strips surrounding whitespace and a stray leading `=`, and prefixes
    /// `http://` when no scheme is present.
    pub fn sanitized_vector_search_url(&self) -> String {
        let url = self.vector_search_url.trim().trim_start_matches('=').trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("http://{}", url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(json: &str) -> Config {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from("{}");

        assert_eq!(config.vector_search_url, "http://localhost:8000");
        assert!(!config.disable_vector_search);
        assert_eq!(config.vector_search_timeout_secs, 5);
        assert_eq!(config.groq_api_key, None);
        assert_eq!(config.groq_timeout_secs, 10);
        assert_eq!(config.together_timeout_secs, 10);
        assert_eq!(config.openai_base_url, "https://api.openai.com");
        assert_eq!(config.openai_timeout_secs, 20);
        assert_eq!(
            config.huggingface_api_url,
            "https://api-inference.huggingface.co"
        );
        assert_eq!(config.huggingface_timeout_secs, 15);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_default_provider_order() {
        let config = config_from("{}");
        assert_eq!(
            config.provider_order,
            vec![
                ProviderKind::VectorSearch,
                ProviderKind::Groq,
                ProviderKind::Together,
                ProviderKind::OpenAi,
                ProviderKind::HuggingFace,
            ]
        );
    }

    #[test]
    fn test_provider_kind_names() {
        let kinds: Vec<ProviderKind> = serde_json::from_str(
            r#"["vector_search", "groq", "together", "openai", "hugging_face"]"#,
        )
        .unwrap();
        assert_eq!(
            kinds,
            vec![
                ProviderKind::VectorSearch,
                ProviderKind::Groq,
                ProviderKind::Together,
                ProviderKind::OpenAi,
                ProviderKind::HuggingFace,
            ]
        );
    }

    #[test]
    fn test_custom_provider_order() {
        let config = config_from(r#"{"provider_order": ["groq", "vector_search"]}"#);
        assert_eq!(
            config.provider_order,
            vec![ProviderKind::Groq, ProviderKind::VectorSearch]
        );
    }

    #[test]
    fn test_sanitized_url_passthrough() {
        let config = config_from("{}");
        assert_eq!(
            config.sanitized_vector_search_url(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_sanitized_url_strips_leading_equals() {
        let mut config = config_from("{}");
        config.vector_search_url = "=https://python-api.internal:8000 ".to_string();
        assert_eq!(
            config.sanitized_vector_search_url(),
            "https://python-api.internal:8000"
        );
    }

    #[test]
    fn test_sanitized_url_adds_scheme() {
        let mut config = config_from("{}");
        config.vector_search_url = "python-api.internal:8000".to_string();
        assert_eq!(
            config.sanitized_vector_search_url(),
            "http://python-api.internal:8000"
        );
    }
}
