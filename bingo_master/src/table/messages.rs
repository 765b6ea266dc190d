//! Table actor message types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::oneshot;

use crate::game::entities::ColumnLetter;

/// Messages that can be sent to a TableActor
#[derive(Debug)]
pub enum TableMessage {
    /// Start a new game, clearing the call history
    StartGame {
        response: oneshot::Sender<TableStatus>,
    },

    /// End the current game, preserving history for display
    EndGame {
        response: oneshot::Sender<TableStatus>,
    },

    /// Draw the next number
    CallNumber {
        response: oneshot::Sender<CallOutcome>,
    },

    /// Snapshot the shared game state
    GetStatus {
        response: oneshot::Sender<TableStatus>,
    },
}

/// Result of a call-number request.
///
/// Both refusals are soft outcomes, not errors; the collaborator decides
/// the user-facing messaging.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CallOutcome {
    /// A number was drawn
    Called {
        number: u8,
        letter: ColumnLetter,
        called_numbers: Vec<u8>,
    },

    /// Every number from 1 to 75 has already been drawn
    Exhausted,

    /// No game is running
    Inactive,
}

impl CallOutcome {
    /// Check if a number was drawn
    pub fn is_called(&self) -> bool {
        matches!(self, CallOutcome::Called { .. })
    }
}

/// Snapshot of the shared game state
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableStatus {
    /// Is a game running
    pub game_active: bool,

    /// Numbers drawn so far, in call order
    pub called_numbers: Vec<u8>,

    /// Most recently drawn number
    pub current_number: Option<u8>,

    /// Count of numbers drawn
    pub total_called: usize,

    /// When the current game started
    pub started_at: Option<DateTime<Utc>>,
}
