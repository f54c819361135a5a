/// Mood request history storage
///
/// The history behind `GET /api/history` sits behind a trait so the HTTP
/// layer stays unaware of where entries live. The bundled implementation
/// keeps them in process memory, newest first.
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{MoodRequest, Recommendation},
};

#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Records a mood request and the recommendations served for it.
    async fn create_mood_request(
        &self,
        mood: String,
        recommendations: Vec<Recommendation>,
    ) -> AppResult<MoodRequest>;

    /// Returns all recorded requests, newest first.
    async fn list_mood_requests(&self) -> AppResult<Vec<MoodRequest>>;
}

#[derive(Default)]
pub struct InMemoryHistoryStore {
    entries: RwLock<Vec<MoodRequest>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn create_mood_request(
        &self,
        mood: String,
        recommendations: Vec<Recommendation>,
    ) -> AppResult<MoodRequest> {
        let entry = MoodRequest::new(mood, recommendations);
        let mut entries = self.entries.write().await;
        entries.insert(0, entry.clone());
        Ok(entry)
    }

    async fn list_mood_requests(&self) -> AppResult<Vec<MoodRequest>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}
