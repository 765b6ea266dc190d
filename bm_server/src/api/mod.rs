//! HTTP API for the bingo server.
//!
//! The request layer is thin glue: it parses JSON, forwards plain data to
//! the engine, and renders the result. All shared game state sits behind
//! the table actor; per-player cards and marks sit in the session manager.
//!
//! # Endpoints Overview
//!
//! ## Game (shared state)
//! - `POST /api/start_game` - Start a new game, clearing the call history
//! - `POST /api/end_game` - End the game, preserving history
//! - `POST /api/call_number` - Draw the next number
//! - `GET /api/game_status` - Snapshot of the shared game state
//!
//! ## Cards (per-player state)
//! - `POST /api/new_card` - Deal a card (allocates a player id if needed)
//! - `POST /api/mark_square` - Toggle a mark and re-check for bingo
//! - `GET /api/session/{player_id}` - A player's card, marks, and the game state
//!
//! ## Health Check
//! - `GET /health` - Server health status

pub mod cards;
pub mod game;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use bingo_master::{SessionManager, TableHandle};

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; both fields are cheap handles to the real owners
/// (the table actor task and the Arc-shared session manager).
#[derive(Clone)]
pub struct AppState {
    pub table: TableHandle,
    pub sessions: Arc<SessionManager>,
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a dead-table error onto a 500 response
pub(crate) fn internal_error(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error }))
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state with the table handle and session manager
///
/// # Returns
///
/// Configured Axum router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/start_game", post(game::start_game))
        .route("/api/end_game", post(game::end_game))
        .route("/api/call_number", post(game::call_number))
        .route("/api/game_status", get(game::game_status))
        .route("/api/new_card", post(cards::new_card))
        .route("/api/mark_square", post(cards::mark_square))
        .route("/api/session/{player_id}", get(cards::session_view))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Server health status
async fn health_check() -> &'static str {
    "OK"
}
