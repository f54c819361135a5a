use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{MoodRequest, Recommendation},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MoodInput {
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Handler for the recommendations endpoint
///
/// Validates the mood, runs the provider chain, and records the outcome in
/// history before responding.
pub async fn create(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(input): Json<MoodInput>,
) -> AppResult<Json<RecommendationsResponse>> {
    let mood = input.mood.trim();
    if mood.is_empty() {
        return Err(AppError::InvalidInput("Mood cannot be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        mood = %mood,
        "Generating recommendations"
    );

    let recommendations = state.orchestrator.orchestrate(mood).await;

    state
        .history
        .create_mood_request(mood.to_string(), recommendations.clone())
        .await?;

    Ok(Json(RecommendationsResponse { recommendations }))
}

/// Handler for the history endpoint
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MoodRequest>>> {
    let entries = state.history.list_mood_requests().await?;
    Ok(Json(entries))
}
