//! Board geometry and number-range constants.

/// Cards and mark grids are square grids with this many cells per side.
pub const GRID_SIZE: usize = 5;

/// Row of the free cell.
pub const FREE_ROW: usize = 2;

/// Column of the free cell.
pub const FREE_COL: usize = 2;

/// Highest callable number.
pub const MAX_NUMBER: u8 = 75;

/// Inclusive number range for each card column, left to right:
/// B takes 1-15, I takes 16-30, N takes 31-45, G takes 46-60, O takes 61-75.
pub const COLUMN_RANGES: [(u8, u8); GRID_SIZE] = [(1, 15), (16, 30), (31, 45), (46, 60), (61, 75)];
