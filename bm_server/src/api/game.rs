//! Shared-game handlers: lifecycle, number calling, and status.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use bingo_master::{CallOutcome, TableStatus};

use super::{AppState, ErrorResponse, internal_error};

#[derive(Debug, Serialize)]
pub struct GameLifecycleResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CallNumberResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub called_numbers: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CallNumberResponse {
    fn unavailable(message: &str) -> Self {
        Self {
            success: false,
            number: None,
            letter: None,
            called_numbers: None,
            message: Some(message.to_string()),
        }
    }
}

/// Start a new game.
///
/// Clears the shared call history and activates the caller. Players keep
/// their cards across games.
pub async fn start_game(
    State(state): State<AppState>,
) -> Result<Json<GameLifecycleResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.table.start_game().await {
        Ok(_) => Ok(Json(GameLifecycleResponse {
            success: true,
            message: "New game started!".to_string(),
        })),
        Err(e) => Err(internal_error(e)),
    }
}

/// End the current game, keeping the call history visible.
pub async fn end_game(
    State(state): State<AppState>,
) -> Result<Json<GameLifecycleResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.table.end_game().await {
        Ok(status) => Ok(Json(GameLifecycleResponse {
            success: true,
            message: format!("Game ended after {} calls", status.total_called),
        })),
        Err(e) => Err(internal_error(e)),
    }
}

/// Draw the next number.
///
/// # Response
///
/// On a draw, `200 OK` with the number, its letter, and the full history:
/// ```json
/// {"success": true, "number": 42, "letter": "N", "called_numbers": [7, 42]}
/// ```
/// When the game is inactive or all 75 numbers are out, `success` is false
/// and `message` says why.
pub async fn call_number(
    State(state): State<AppState>,
) -> Result<Json<CallNumberResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.table.call_number().await {
        Ok(CallOutcome::Called {
            number,
            letter,
            called_numbers,
        }) => Ok(Json(CallNumberResponse {
            success: true,
            number: Some(number),
            letter: Some(letter.to_string()),
            called_numbers: Some(called_numbers),
            message: None,
        })),
        Ok(CallOutcome::Exhausted) => Ok(Json(CallNumberResponse::unavailable(
            "No more numbers to call",
        ))),
        Ok(CallOutcome::Inactive) => Ok(Json(CallNumberResponse::unavailable(
            "Game is not active",
        ))),
        Err(e) => Err(internal_error(e)),
    }
}

/// Snapshot of the shared game state.
pub async fn game_status(
    State(state): State<AppState>,
) -> Result<Json<TableStatus>, (StatusCode, Json<ErrorResponse>)> {
    match state.table.status().await {
        Ok(status) => Ok(Json(status)),
        Err(e) => Err(internal_error(e)),
    }
}
