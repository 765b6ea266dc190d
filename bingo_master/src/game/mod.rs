//! Bingo game engine - entities, caller state, and win detection.
//!
//! This module provides the foundational game implementation including:
//! - Card generation under the standard column-range constraints
//! - Mark tracking over a player's card
//! - Win detection across rows, columns, and both diagonals
//! - The number caller drawing from 1-75 without repeats

// Submodules
pub mod caller;
pub mod constants;
pub mod entities;
pub mod errors;
pub mod functional;

pub use caller::Caller;
pub use errors::{GameError, GameResult};
