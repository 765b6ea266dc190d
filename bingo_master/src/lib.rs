//! # Bingo Master
//!
//! A single-table bingo engine: card generation, number calling, mark
//! tracking, and win-pattern detection.
//!
//! ## Architecture
//!
//! The engine splits into three pieces:
//!
//! - **Per-player state**: every player owns one [`Card`](game::entities::Card)
//!   and one [`MarkGrid`](game::entities::MarkGrid), held by a
//!   [`SessionManager`](session::SessionManager) keyed by player id. Player
//!   state never contends across players.
//! - **Shared state**: the call history and active flag belong to a single
//!   [`Caller`](game::Caller), owned exclusively by a
//!   [`TableActor`](table::TableActor). All mutation flows through the
//!   actor's inbox one message at a time, so two simultaneous call requests
//!   can never draw the same number.
//! - **Pure rules**: win detection ([`game::functional`]) and the letter
//!   mapping are plain functions over explicit data.
//!
//! ## Core Modules
//!
//! - [`game`]: entities, constants, the caller state, and win detection
//! - [`session`]: player-id to card/marks mapping
//! - [`table`]: async actor serializing the shared game state
//!
//! ## Example
//!
//! ```
//! use bingo_master::game::entities::Card;
//!
//! // Deal a card: five columns, each drawn from its own number range
//! let card = Card::generate();
//! ```

/// Core game logic: entities, caller state, and win detection.
pub mod game;
pub use game::{
    Caller, GameError,
    constants::{GRID_SIZE, MAX_NUMBER},
    entities::{self, ColumnLetter, WinningLine},
    functional,
};

/// Per-player session state management.
pub mod session;
pub use session::{PlayerId, PlayerSession, SessionManager, ToggleOutcome};

/// Table actor serializing the shared call state.
pub mod table;
pub use table::{CallOutcome, TableActor, TableConfig, TableHandle, TableMessage, TableStatus};
