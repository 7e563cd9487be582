use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::ApiError,
    game::{RoundState, RoundStatus},
    models::{Grid, Position},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct StartRoundRequest {
    /// Optional seed for a reproducible grid.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RoundCreated {
    pub round_id: Uuid,
    pub grid: Grid,
    pub words: Vec<String>,
    pub seconds_left: u32,
    /// How many words actually landed on the grid. Zero signals the
    /// fallback grid (playable but unsolvable).
    pub placed_words: usize,
}

#[derive(Debug, Serialize)]
pub struct RoundSnapshot {
    pub round_id: Uuid,
    pub grid: Grid,
    pub score: u32,
    pub seconds_left: u32,
    pub status: RoundStatus,
    pub found: Vec<String>,
    pub all_found: bool,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// Cells the player dragged across, in order. Only the endpoints
    /// decide the outcome.
    pub cells: Vec<Position>,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub matched: Option<String>,
    pub score: u32,
    pub found: Vec<String>,
    pub all_found: bool,
    pub status: RoundStatus,
}

fn snapshot(round_id: Uuid, round: &RoundState, words_total: usize) -> RoundSnapshot {
    RoundSnapshot {
        round_id,
        grid: round.grid.cells.clone(),
        score: round.score,
        seconds_left: round.seconds_left,
        status: round.status,
        found: round.found.words().map(str::to_string).collect(),
        all_found: round.found.len() == words_total,
    }
}

/// Start a new round: generate a grid and register it under a fresh id.
pub async fn start_round(
    State(state): State<Arc<AppState>>,
    body: Option<Json<StartRoundRequest>>,
) -> Json<RoundCreated> {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let size = state.config.game.grid_size;
    let duration = state.config.game.round_duration;

    let round = match req.seed {
        Some(seed) => RoundState::start(
            &state.words,
            size,
            duration,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => RoundState::start(&state.words, size, duration, &mut rand::rng()),
    };

    let round_id = Uuid::new_v4();
    tracing::info!(
        "Round {} started: {}/{} words placed on a {}x{} grid",
        round_id,
        round.grid.placements.len(),
        state.words.len(),
        size,
        size
    );

    let created = RoundCreated {
        round_id,
        grid: round.grid.cells.clone(),
        words: state.words.iter().map(str::to_string).collect(),
        seconds_left: round.seconds_left,
        placed_words: round.grid.placements.len(),
    };
    state.rounds.insert(round_id, round);

    Json(created)
}

/// Current state of a round.
pub async fn get_round(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundSnapshot>, ApiError> {
    let round = state.rounds.get(&round_id).ok_or(ApiError::RoundNotFound)?;
    Ok(Json(snapshot(round_id, &round, state.words.len())))
}

/// Submit a released selection for validation.
pub async fn submit_selection(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, ApiError> {
    let mut round = state
        .rounds
        .get_mut(&round_id)
        .ok_or(ApiError::RoundNotFound)?;

    if round.status == RoundStatus::Finished {
        return Err(ApiError::RoundOver);
    }

    let matched = round.select(&req.cells, &state.words);
    if let Some(word) = &matched {
        tracing::debug!("Round {}: found {} (score {})", round_id, word, round.score);
    }

    Ok(Json(SelectResponse {
        matched,
        score: round.score,
        found: round.found.words().map(str::to_string).collect(),
        all_found: round.all_found(&state.words),
        status: round.status,
    }))
}

/// Pause the round clock.
pub async fn pause_round(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundSnapshot>, ApiError> {
    let mut round = state
        .rounds
        .get_mut(&round_id)
        .ok_or(ApiError::RoundNotFound)?;
    round.pause();
    Ok(Json(snapshot(round_id, &round, state.words.len())))
}

/// Resume a paused round.
pub async fn resume_round(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundSnapshot>, ApiError> {
    let mut round = state
        .rounds
        .get_mut(&round_id)
        .ok_or(ApiError::RoundNotFound)?;
    round.resume();
    Ok(Json(snapshot(round_id, &round, state.words.len())))
}

/// End the round early (the player gave up or started over).
pub async fn end_round(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundSnapshot>, ApiError> {
    let mut round = state
        .rounds
        .get_mut(&round_id)
        .ok_or(ApiError::RoundNotFound)?;
    round.end();
    Ok(Json(snapshot(round_id, &round, state.words.len())))
}
