//! Per-player handlers: dealing cards, toggling marks, viewing sessions.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bingo_master::GameError;
use bingo_master::game::entities::{Card, MarkGrid};

use super::{AppState, ErrorResponse, internal_error};

#[derive(Debug, Deserialize)]
pub struct NewCardRequest {
    /// Omit to be dealt a fresh player id along with the card
    pub player_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct NewCardResponse {
    pub success: bool,
    pub player_id: Uuid,
    pub bingo_card: Card,
    pub marked: MarkGrid,
}

#[derive(Debug, Deserialize)]
pub struct MarkSquareRequest {
    pub player_id: Uuid,
    pub row: i64,
    pub col: i64,
}

#[derive(Debug, Serialize)]
pub struct MarkSquareResponse {
    pub success: bool,
    pub marked: MarkGrid,
    pub has_bingo: bool,
    /// Empty string when no line is complete
    pub winning_pattern: String,
}

#[derive(Debug, Serialize)]
pub struct SessionViewResponse {
    pub player_id: Uuid,
    pub bingo_card: Card,
    pub marked: MarkGrid,
    pub game_active: bool,
    pub called_numbers: Vec<u8>,
    pub current_number: Option<u8>,
}

/// Map an engine error onto a status code and error body
fn game_error(error: GameError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        GameError::MarkOutOfBounds { .. } | GameError::FreeSpaceLocked => StatusCode::BAD_REQUEST,
        GameError::SessionNotFound => StatusCode::NOT_FOUND,
        GameError::TableFull => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(ErrorResponse { error: error.to_string() }))
}

/// Deal a card.
///
/// With no body (or no `player_id`), allocates a fresh player id and deals
/// it a card. With a known `player_id`, replaces that player's card and
/// marks wholesale. Either way the free space comes pre-marked.
pub async fn new_card(
    State(state): State<AppState>,
    body: Option<Json<NewCardRequest>>,
) -> Result<Json<NewCardResponse>, (StatusCode, Json<ErrorResponse>)> {
    let player_id = body
        .and_then(|Json(request)| request.player_id)
        .unwrap_or_else(Uuid::new_v4);

    match state.sessions.new_card(player_id).await {
        Ok(session) => Ok(Json(NewCardResponse {
            success: true,
            player_id,
            bingo_card: session.card,
            marked: session.marks,
        })),
        Err(e) => Err(game_error(e)),
    }
}

/// Toggle a mark and re-check the player's grid for bingo.
///
/// # Errors
///
/// - `400 Bad Request`: row or col outside 0-4
/// - `404 Not Found`: no game session found for the player
pub async fn mark_square(
    State(state): State<AppState>,
    Json(request): Json<MarkSquareRequest>,
) -> Result<Json<MarkSquareResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (Ok(row), Ok(col)) = (usize::try_from(request.row), usize::try_from(request.col)) else {
        return Err(game_error(GameError::MarkOutOfBounds {
            row: request.row,
            col: request.col,
        }));
    };

    match state.sessions.toggle_mark(request.player_id, row, col).await {
        Ok(outcome) => Ok(Json(MarkSquareResponse {
            success: true,
            marked: outcome.marks,
            has_bingo: outcome.winning_line.is_some(),
            winning_pattern: outcome
                .winning_line
                .map(|line| line.to_string())
                .unwrap_or_default(),
        })),
        Err(e) => Err(game_error(e)),
    }
}

/// A player's card and marks, plus the shared game state for rendering.
pub async fn session_view(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> Result<Json<SessionViewResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = state.sessions.view(player_id).await.map_err(game_error)?;
    let status = state.table.status().await.map_err(internal_error)?;

    Ok(Json(SessionViewResponse {
        player_id,
        bingo_card: session.card,
        marked: session.marks,
        game_active: status.game_active,
        called_numbers: status.called_numbers,
        current_number: status.current_number,
    }))
}
