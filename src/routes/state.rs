use std::sync::Arc;

use crate::{services::Orchestrator, storage::HistoryStore};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            orchestrator,
            history,
        }
    }
}
