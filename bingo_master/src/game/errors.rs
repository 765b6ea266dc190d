//! Game engine error types.

use thiserror::Error;

/// Result type for engine operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors reported to the calling collaborator.
///
/// None of these are fatal to the process; the collaborator decides the
/// user-facing messaging. Exhaustion of the number pool is not an error
/// (the caller reports it as a plain "no value" outcome).
#[derive(Debug, Eq, Error, PartialEq)]
pub enum GameError {
    /// Mark coordinates outside the 5x5 grid
    #[error("mark position ({row}, {col}) is outside the card")]
    MarkOutOfBounds { row: i64, col: i64 },

    /// The table keeps the free space permanently marked
    #[error("the free space stays marked at this table")]
    FreeSpaceLocked,

    /// No card and mark grid established for this player
    #[error("no game session found")]
    SessionNotFound,

    /// Session cap reached
    #[error("table is full")]
    TableFull,
}
