/// Recommendation orchestrator
///
/// Walks the configured provider chain in priority order and returns the
/// first non-empty result. Provider failures are logged and absorbed; when
/// every provider is exhausted the keyword fallback takes over, so a call
/// always yields recommendations.
use std::sync::Arc;

use crate::{models::Recommendation, services::fallback};

use super::providers::RecommendationProvider;

pub struct Orchestrator {
    providers: Vec<Arc<dyn RecommendationProvider>>,
}

impl Orchestrator {
    pub fn new(providers: Vec<Arc<dyn RecommendationProvider>>) -> Self {
        Self { providers }
    }

    /// Produces recommendations for a mood, never returning an empty list.
    ///
    /// An `Ok` with no items counts as a failure: the provider had nothing
    /// to offer, so the chain moves on.
    pub async fn orchestrate(&self, mood: &str) -> Vec<Recommendation> {
        for provider in &self.providers {
            tracing::debug!(provider = provider.name(), "Trying provider");

            match provider.generate(mood).await {
                Ok(recommendations) if !recommendations.is_empty() => {
                    tracing::info!(
                        provider = provider.name(),
                        count = recommendations.len(),
                        "Provider produced recommendations"
                    );
                    return recommendations;
                }
                Ok(_) => {
                    tracing::warn!(
                        provider = provider.name(),
                        "Provider returned an empty list, trying next"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %err,
                        "Provider failed, trying next"
                    );
                }
            }
        }

        tracing::info!("All providers exhausted, using fallback recommendations");
        fallback::fallback_recommendations(mood)
    }
}
