//! Pure win detection over mark grids.
//!
//! Detection reads marks only. Whether the number under a marked cell was
//! ever actually called is deliberately not checked here, so the engine
//! trusts the player's marks; a deployment that needs honest cards must
//! cross-check marks against the call history on top of this.

use super::constants::GRID_SIZE;
use super::entities::{MarkGrid, WinningLine};

/// Find the first fully marked line, if any.
///
/// Candidate lines are checked in fixed precedence order: rows top to
/// bottom, then columns left to right, then the main diagonal, then the
/// anti-diagonal. Each line is evaluated exactly once per call, and marks
/// are re-read on every call since they change between checks. Total over
/// any grid.
pub fn check_win(marks: &MarkGrid) -> Option<WinningLine> {
    for row in 0..GRID_SIZE {
        if (0..GRID_SIZE).all(|col| marks.is_marked(row, col)) {
            return Some(WinningLine::Row(row));
        }
    }

    for col in 0..GRID_SIZE {
        if (0..GRID_SIZE).all(|row| marks.is_marked(row, col)) {
            return Some(WinningLine::Column(col));
        }
    }

    if (0..GRID_SIZE).all(|i| marks.is_marked(i, i)) {
        return Some(WinningLine::MainDiagonal);
    }

    if (0..GRID_SIZE).all(|i| marks.is_marked(i, GRID_SIZE - 1 - i)) {
        return Some(WinningLine::AntiDiagonal);
    }

    None
}
