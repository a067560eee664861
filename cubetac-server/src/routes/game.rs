//! Game API routes
//!
//! Human and computer moves go through the same engine call; the handlers
//! only translate between HTTP and `cubetac-core` types. Invalid moves map
//! to 422 with the engine's error text and leave the session untouched.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use cubetac_core::{Cell, GameResult, GameState, HeuristicAi, LayerOutcome, Line, Player};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::{GameMode, GameSession, ServerState};

type ApiError = (StatusCode, String);

/// Full state snapshot returned after every call
#[derive(Serialize)]
pub struct Snapshot {
    pub board: Vec<Cell>,
    pub layers: Vec<LayerOutcome>,
    pub current_player: Player,
    pub result: GameResult,
    pub winning_line: Option<Line>,
    pub score: (u8, u8),
}

impl Snapshot {
    fn of(game: &GameState) -> Self {
        Self {
            board: game.board().to_vec(),
            layers: game.layer_outcomes().to_vec(),
            current_player: game.current_player(),
            result: game.result(),
            winning_line: game.winning_line(),
            score: game.score(),
        }
    }
}

#[derive(Deserialize)]
pub struct StartRequest {
    pub session: String,
    #[serde(default)]
    pub mode: GameMode,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session: String,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub session: String,
    pub index: usize,
}

#[derive(Serialize)]
pub struct AiMoveResponse {
    pub index: usize,
    pub state: Snapshot,
}

fn unknown_session(session: &str) -> ApiError {
    (StatusCode::NOT_FOUND, format!("unknown session: {session}"))
}

/// Create (or replace) a session and return its fresh state
pub async fn start_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<StartRequest>,
) -> Json<Snapshot> {
    tracing::info!("starting {:?} session '{}'", req.mode, req.session);

    let session = GameSession::new(req.mode, req.seed);
    let snapshot = Snapshot::of(&session.game);
    state.sessions.write().unwrap().insert(req.session, session);

    Json(snapshot)
}

/// Current state of a session
pub async fn game_state(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<Snapshot>, ApiError> {
    let sessions = state.sessions.read().unwrap();
    let session = sessions
        .get(&query.session)
        .ok_or_else(|| unknown_session(&query.session))?;

    Ok(Json(Snapshot::of(&session.game)))
}

/// Apply a move for whoever's turn it is
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<Snapshot>, ApiError> {
    let mut sessions = state.sessions.write().unwrap();
    let session = sessions
        .get_mut(&req.session)
        .ok_or_else(|| unknown_session(&req.session))?;

    session
        .game
        .apply_move(req.index)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    Ok(Json(Snapshot::of(&session.game)))
}

/// Ask the opponent heuristic for a move and apply it
pub async fn ai_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SessionQuery>,
) -> Result<Json<AiMoveResponse>, ApiError> {
    let mut sessions = state.sessions.write().unwrap();
    let session = sessions
        .get_mut(&req.session)
        .ok_or_else(|| unknown_session(&req.session))?;

    if session.mode != GameMode::Pve {
        return Err((
            StatusCode::CONFLICT,
            "session has no computer opponent".to_string(),
        ));
    }
    if session.game.is_terminal() {
        return Err((StatusCode::CONFLICT, "the match is already over".to_string()));
    }
    if session.game.current_player() != HeuristicAi::MARK {
        return Err((
            StatusCode::CONFLICT,
            "it is not the computer's turn".to_string(),
        ));
    }

    let index = session
        .ai
        .choose_move(session.game.board(), session.game.layer_outcomes())
        .ok_or_else(|| (StatusCode::CONFLICT, "no move available".to_string()))?;

    session
        .game
        .apply_move(index)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    tracing::debug!("session '{}': computer played {}", req.session, index);

    Ok(Json(AiMoveResponse {
        index,
        state: Snapshot::of(&session.game),
    }))
}

/// Reset a session to the fresh-match state
pub async fn reset_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SessionQuery>,
) -> Result<Json<Snapshot>, ApiError> {
    let mut sessions = state.sessions.write().unwrap();
    let session = sessions
        .get_mut(&req.session)
        .ok_or_else(|| unknown_session(&req.session))?;

    session.game.reset();
    Ok(Json(Snapshot::of(&session.game)))
}
