mod config;
mod error;
mod game;
mod models;
mod routes;
mod words;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::Router;
use chrono::Utc;
use config::Config;
use dashmap::DashMap;
use game::{RoundState, RoundStatus};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use words::WordList;

/// How long finished rounds stay queryable before eviction.
pub const FINISHED_ROUND_RETENTION: Duration = Duration::from_secs(300);

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub words: WordList,
    /// Live rounds keyed by round id. The clock task ticks these once
    /// per second and evicts finished ones after the retention period.
    pub rounds: DashMap<Uuid, RoundState>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load the word list, falling back to the builtin one
    let word_list = match &config.game.word_list_path {
        Some(path) => match WordList::load(path).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(
                    "Failed to load word list from {}: {}. Using builtin list.",
                    path,
                    e
                );
                WordList::builtin()
            }
        },
        None => {
            tracing::info!("No WORD_LIST_PATH set, using builtin word list");
            WordList::builtin()
        }
    };
    tracing::info!("Word list ready ({} words)", word_list.len());

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        words: word_list,
        rounds: DashMap::new(),
    });

    // Spawn the round clock: ticks running rounds and evicts stale ones
    let clock_state = state.clone();
    tokio::spawn(async move {
        round_clock_task(clock_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Background task driving every round's countdown. Fires once per second;
/// the core round state itself stays a plain synchronous value, this task
/// is the only thing that calls `tick` on it. Rounds finished longer than
/// the retention period are dropped.
async fn round_clock_task(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));

    loop {
        interval.tick().await;

        let mut rounds_to_remove = Vec::new();

        for mut round_ref in state.rounds.iter_mut() {
            let round_id = *round_ref.key();
            let round = round_ref.value_mut();

            if round.tick() == RoundStatus::Finished {
                if let Some(finished_at) = round.finished_at {
                    let age = Utc::now().signed_duration_since(finished_at);
                    if age.num_seconds() >= FINISHED_ROUND_RETENTION.as_secs() as i64 {
                        rounds_to_remove.push(round_id);
                    }
                }
            }
        }

        for round_id in rounds_to_remove {
            if state.rounds.remove(&round_id).is_some() {
                tracing::info!("Evicted finished round {} (retention expired)", round_id);
            }
        }
    }
}
