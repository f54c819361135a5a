use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Classified failure from a single provider attempt
///
/// Every way a provider can fail maps to one of these variants, so the
/// orchestrator decides control flow by matching on data rather than on
/// error message text. None of these ever reach the HTTP caller; the
/// orchestrator absorbs them all and falls back.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// A required credential or endpoint setting is absent
    #[error("Provider not configured: {0}")]
    ConfigurationMissing(String),

    /// The request exceeded the provider's configured time budget
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The backing resource exists but is not serving results right now
    /// (rate limit, cold start, 5xx)
    #[error("Provider temporarily unavailable: {0}")]
    TransientUnavailable(String),

    /// The endpoint is gone, deprecated, or rejects this request shape
    #[error("Endpoint unavailable: {0}")]
    EndpointUnavailable(String),

    /// The provider rejected our credentials
    #[error("Authentication failed: {0}")]
    AuthenticationInvalid(String),

    /// The response body did not contain a usable recommendation payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The provider answered with a syntactically valid but empty list
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// The request never completed at the transport level
    #[error("Network failure: {0}")]
    NetworkFailure(String),
}

impl ProviderError {
    /// Classifies a non-success HTTP status from a provider endpoint.
    ///
    /// The message is carried through untouched; only the variant is derived
    /// from the status code.
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 | 403 => ProviderError::AuthenticationInvalid(message),
            404 | 410 => ProviderError::EndpointUnavailable(message),
            408 | 429 => ProviderError::TransientUnavailable(message),
            code if code >= 500 => ProviderError::TransientUnavailable(message),
            _ => ProviderError::EndpointUnavailable(message),
        }
    }

    /// Classifies a failure while reading or decoding a response body.
    ///
    /// The per-request timeout covers the body read too, and the client
    /// reports such failures as decode errors that still satisfy
    /// `is_timeout`, so timeouts are split out before defaulting to
    /// `MalformedResponse`. The message is carried through untouched.
    pub fn from_decode(err: &reqwest::Error, message: String) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(message)
        } else {
            ProviderError::MalformedResponse(message)
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_decode() {
            ProviderError::MalformedResponse(err.to_string())
        } else {
            ProviderError::NetworkFailure(err.to_string())
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;
