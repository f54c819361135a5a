use std::sync::Arc;

use moodcurator_api::{
    config::Config,
    models::{ContentType, Recommendation},
    routes::{create_router, AppState},
    services::{providers, Orchestrator},
    storage::{HistoryStore, InMemoryHistoryStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing();

    let provider_chain = providers::build_providers(&config);
    tracing::info!(
        providers = provider_chain.len(),
        "Provider chain configured"
    );

    let orchestrator = Arc::new(Orchestrator::new(provider_chain));
    let history: Arc<dyn HistoryStore> = Arc::new(InMemoryHistoryStore::new());
    seed_history(history.as_ref()).await?;

    let state = AppState::new(orchestrator, history);
    let app = create_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Seeds the history with one example entry so a fresh instance has
/// something to show.
async fn seed_history(history: &dyn HistoryStore) -> anyhow::Result<()> {
    if !history.list_mood_requests().await?.is_empty() {
        return Ok(());
    }

    let recommendations = vec![
        Recommendation {
            title: "Ted Lasso".to_string(),
            content_type: ContentType::TvShow,
            description: "An American football coach manages a British soccer team.".to_string(),
            reason: "It's full of optimism and kindness.".to_string(),
        },
        Recommendation {
            title: "The Secret Life of Walter Mitty".to_string(),
            content_type: ContentType::Movie,
            description: "A daydreamer escapes his anonymous life.".to_string(),
            reason: "Inspiring and visually beautiful.".to_string(),
        },
        Recommendation {
            title: "Daily Dose of Internet".to_string(),
            content_type: ContentType::YouTubeVideo,
            description: "Curated viral videos.".to_string(),
            reason: "Short, wholesome, and positive.".to_string(),
        },
    ];

    history
        .create_mood_request("Optimistic".to_string(), recommendations)
        .await?;

    Ok(())
}
