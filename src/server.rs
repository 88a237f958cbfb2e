//! Axum HTTP server: a thin host around one [`QuizSession`].
//!
//! The session lives behind `Arc<Mutex<_>>`; every handler locks, acts and
//! returns a fresh [`SessionSnapshot`](crate::session::SessionSnapshot).
//! The lock is never held across an await point.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/state` | Current snapshot |
//! | POST | `/guess` | Submit `{ "text": ... }` |
//! | POST | `/reveal` | Reveal hint `{ "index": ... }` |
//! | POST | `/round` | Start the next round (409 once the game is over) |
//! | POST | `/session` | Restart with a full life budget |

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::session::{QuizSession, SessionError};
use crate::storage::StatsStore;

pub type SharedSession = QuizSession<Box<dyn StatsStore + Send>>;
pub type AppState = Arc<Mutex<SharedSession>>;

type ApiResult = Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)>;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/state", get(handle_get_state))
        .route("/guess", post(handle_guess))
        .route("/reveal", post(handle_reveal))
        .route("/round", post(handle_new_round))
        .route("/session", post(handle_new_session))
        .layer(cors)
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct GuessRequest {
    text: String,
}

#[derive(Deserialize)]
struct RevealRequest {
    index: usize,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

/// A panic inside a handler poisons the mutex; the session data is still
/// consistent between calls, so keep serving it.
fn lock(state: &AppState) -> MutexGuard<'_, SharedSession> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn snapshot_json(session: &SharedSession) -> ApiResult {
    serde_json::to_value(session.snapshot())
        .map(Json)
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_state(State(state): State<AppState>) -> ApiResult {
    let session = lock(&state);
    snapshot_json(&session)
}

async fn handle_guess(State(state): State<AppState>, Json(req): Json<GuessRequest>) -> ApiResult {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "Guess text is empty"));
    }

    let mut session = lock(&state);
    let outcome = session.submit_guess(text);
    let warnings = session.take_warnings();
    let Json(snapshot) = snapshot_json(&session)?;

    Ok(Json(serde_json::json!({
        "outcome": outcome,
        "was_correct": outcome.was_correct(),
        "warnings": warnings,
        "state": snapshot,
    })))
}

async fn handle_reveal(State(state): State<AppState>, Json(req): Json<RevealRequest>) -> ApiResult {
    let mut session = lock(&state);
    let (cost, content) = match session.reveal_hint(req.index) {
        Ok(hint) => (hint.cost, hint.content.to_string()),
        Err(e @ SessionError::UnknownHint { .. }) => {
            return Err(error_response(StatusCode::NOT_FOUND, &e.to_string()))
        }
        Err(e) => {
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &e.to_string(),
            ))
        }
    };
    let Json(snapshot) = snapshot_json(&session)?;

    Ok(Json(serde_json::json!({
        "index": req.index,
        "cost": cost,
        "content": content,
        "state": snapshot,
    })))
}

async fn handle_new_round(State(state): State<AppState>) -> ApiResult {
    let mut session = lock(&state);
    session.start_new_round().map_err(round_error)?;
    snapshot_json(&session)
}

async fn handle_new_session(State(state): State<AppState>) -> ApiResult {
    let mut session = lock(&state);
    session.restart().map_err(round_error)?;
    snapshot_json(&session)
}

fn round_error(e: SessionError) -> (StatusCode, Json<serde_json::Value>) {
    match e {
        SessionError::GameOver => {
            error_response(StatusCode::CONFLICT, "Game over, POST /session to restart")
        }
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
    }
}
