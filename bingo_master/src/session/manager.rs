//! Session manager mapping player ids to their card and marks.
//!
//! This is the explicit replacement for per-request dictionary lookups:
//! one map, owned here, keyed by player id, handed out as snapshots. Player
//! state has no cross-player contention; the write lock only serializes
//! concurrent requests from the same player so toggles are never lost.

use std::collections::HashMap;

use log::info;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::game::constants::{FREE_COL, FREE_ROW};
use crate::game::entities::{Card, MarkGrid, WinningLine};
use crate::game::errors::{GameError, GameResult};
use crate::game::functional::check_win;
use crate::table::TableConfig;

/// Player identifier handed out alongside a fresh card.
pub type PlayerId = Uuid;

/// One player's state: the card plus the marks layered over it.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerSession {
    pub card: Card,
    pub marks: MarkGrid,
}

impl PlayerSession {
    fn new() -> Self {
        Self {
            card: Card::generate(),
            marks: MarkGrid::new(),
        }
    }
}

/// Outcome of a mark toggle: the updated grid plus the win re-check.
#[derive(Clone, Debug, Serialize)]
pub struct ToggleOutcome {
    pub marks: MarkGrid,
    pub winning_line: Option<WinningLine>,
}

/// Maps player ids to their sessions.
///
/// Share it behind an `Arc`; all mutation goes through the inner lock.
pub struct SessionManager {
    config: TableConfig,
    sessions: RwLock<HashMap<PlayerId, PlayerSession>>,
}

impl SessionManager {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Deal a card for a new player, or replace an existing player's card
    /// and marks wholesale.
    ///
    /// The fresh mark grid has the free space pre-marked.
    pub async fn new_card(&self, player_id: PlayerId) -> GameResult<PlayerSession> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&player_id) && sessions.len() >= self.config.max_sessions {
            return Err(GameError::TableFull);
        }

        let session = PlayerSession::new();
        sessions.insert(player_id, session.clone());
        info!("player {player_id} drew a new card");
        Ok(session)
    }

    /// Flip a mark and re-run win detection against the player's grid.
    ///
    /// Win detection reads the whole grid every time; marks may have
    /// changed in either direction since the last check.
    pub async fn toggle_mark(
        &self,
        player_id: PlayerId,
        row: usize,
        col: usize,
    ) -> GameResult<ToggleOutcome> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&player_id)
            .ok_or(GameError::SessionNotFound)?;

        if self.config.lock_free_space && (row, col) == (FREE_ROW, FREE_COL) {
            return Err(GameError::FreeSpaceLocked);
        }

        session.marks.toggle(row, col)?;
        let winning_line = check_win(&session.marks);
        if let Some(line) = winning_line {
            info!("player {player_id} has bingo: {line}");
        }

        Ok(ToggleOutcome {
            marks: session.marks.clone(),
            winning_line,
        })
    }

    /// Snapshot a player's card and marks.
    pub async fn view(&self, player_id: PlayerId) -> GameResult<PlayerSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&player_id)
            .cloned()
            .ok_or(GameError::SessionNotFound)
    }

    /// Number of players currently holding a card.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new(TableConfig::default())
    }

    #[tokio::test]
    async fn test_new_card_creates_session() {
        let sessions = manager();
        let player = Uuid::new_v4();

        let session = sessions.new_card(player).await.unwrap();
        assert!(session.marks.is_marked(FREE_ROW, FREE_COL));
        assert_eq!(sessions.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_new_card_replaces_card_and_marks() {
        let sessions = manager();
        let player = Uuid::new_v4();

        sessions.new_card(player).await.unwrap();
        sessions.toggle_mark(player, 0, 0).await.unwrap();

        let replaced = sessions.new_card(player).await.unwrap();
        assert!(!replaced.marks.is_marked(0, 0));
        assert_eq!(sessions.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_toggle_without_session_fails() {
        let sessions = manager();
        let result = sessions.toggle_mark(Uuid::new_v4(), 0, 0).await;
        assert_eq!(result.unwrap_err(), GameError::SessionNotFound);
    }

    #[tokio::test]
    async fn test_toggle_out_of_bounds_fails_and_preserves_marks() {
        let sessions = manager();
        let player = Uuid::new_v4();
        sessions.new_card(player).await.unwrap();

        let result = sessions.toggle_mark(player, 5, 0).await;
        assert_eq!(
            result.unwrap_err(),
            GameError::MarkOutOfBounds { row: 5, col: 0 }
        );

        let view = sessions.view(player).await.unwrap();
        assert_eq!(view.marks, MarkGrid::new());
    }

    #[tokio::test]
    async fn test_locked_free_space_rejects_toggle() {
        let config = TableConfig {
            lock_free_space: true,
            ..TableConfig::default()
        };
        let sessions = SessionManager::new(config);
        let player = Uuid::new_v4();
        sessions.new_card(player).await.unwrap();

        let result = sessions.toggle_mark(player, FREE_ROW, FREE_COL).await;
        assert_eq!(result.unwrap_err(), GameError::FreeSpaceLocked);
    }

    #[tokio::test]
    async fn test_session_cap() {
        let config = TableConfig {
            max_sessions: 1,
            ..TableConfig::default()
        };
        let sessions = SessionManager::new(config);
        let first = Uuid::new_v4();

        sessions.new_card(first).await.unwrap();
        let result = sessions.new_card(Uuid::new_v4()).await;
        assert_eq!(result.unwrap_err(), GameError::TableFull);

        // Re-dealing an existing player is always allowed
        sessions.new_card(first).await.unwrap();
    }
}
