//! Per-player session state: each player owns one card and one mark grid.

pub mod manager;

pub use manager::{PlayerId, PlayerSession, SessionManager, ToggleOutcome};
