use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

use super::constants::{COLUMN_RANGES, FREE_COL, FREE_ROW, GRID_SIZE};
use super::errors::{GameError, GameResult};

/// Column letters in board order, left to right.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ColumnLetter {
    B,
    I,
    N,
    G,
    O,
}

impl ColumnLetter {
    /// Letter heading the given column index.
    pub fn for_column(col: usize) -> Option<Self> {
        match col {
            0 => Some(Self::B),
            1 => Some(Self::I),
            2 => Some(Self::N),
            3 => Some(Self::G),
            4 => Some(Self::O),
            _ => None,
        }
    }

    /// Letter a caller announces with the given number.
    ///
    /// Numbers outside 1-75 map to no letter.
    pub fn letter_for(number: u8) -> Option<Self> {
        COLUMN_RANGES
            .iter()
            .position(|&(lo, hi)| (lo..=hi).contains(&number))
            .and_then(Self::for_column)
    }
}

impl fmt::Display for ColumnLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::B => "B",
            Self::I => "I",
            Self::N => "N",
            Self::G => "G",
            Self::O => "O",
        };
        write!(f, "{repr}")
    }
}

/// A single card cell: the free marker or a number from the column's range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Free,
    Number(u8),
}

impl Cell {
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "FREE"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

// On the wire the free cell is the string "FREE" and every other cell is
// its bare number.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Free => serializer.serialize_str("FREE"),
            Self::Number(n) => serializer.serialize_u8(*n),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u8),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::Number(n)),
            Raw::Marker(s) if s == "FREE" => Ok(Self::Free),
            Raw::Marker(s) => Err(de::Error::custom(format!("unknown cell marker: {s}"))),
        }
    }
}

/// A player's 5x5 card.
///
/// Invariants: cell (2,2) is the free marker, and within a column every
/// number is distinct and drawn from that column's range. Cards are never
/// mutated in place; regeneration replaces the card wholesale.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card([[Cell; GRID_SIZE]; GRID_SIZE]);

impl Card {
    /// Generate a random card with proper column ranges.
    ///
    /// Each column draws its values uniformly without replacement from its
    /// own 15-number range, so a column can never repeat a number. The
    /// middle cell stays the free marker and consumes no draw.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut grid = [[Cell::Free; GRID_SIZE]; GRID_SIZE];

        for (col, &(lo, hi)) in COLUMN_RANGES.iter().enumerate() {
            let mut pool: Vec<u8> = (lo..=hi).collect();
            pool.shuffle(&mut rng);

            let rows = (0..GRID_SIZE).filter(|&row| !(row == FREE_ROW && col == FREE_COL));
            for (row, value) in rows.zip(pool) {
                grid[row][col] = Cell::Number(value);
            }
        }

        Self(grid)
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The full grid, row-major.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.0
    }
}

impl From<[[Cell; GRID_SIZE]; GRID_SIZE]> for Card {
    fn from(grid: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(grid)
    }
}

/// Mark state tracking which of a card's cells the player has marked.
///
/// Same indexing as the card it overlays. A fresh grid has only the free
/// cell pre-marked.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MarkGrid([[bool; GRID_SIZE]; GRID_SIZE]);

impl MarkGrid {
    /// Fresh grid with the free space pre-marked and nothing else.
    pub fn new() -> Self {
        let mut marks = [[false; GRID_SIZE]; GRID_SIZE];
        marks[FREE_ROW][FREE_COL] = true;
        Self(marks)
    }

    /// Whether (row, col) is marked. Out-of-grid cells read as unmarked.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the mark at (row, col) and return the new state.
    ///
    /// Rejects coordinates outside the grid, leaving the marks unchanged.
    /// The free cell gets no special treatment here; tables that keep it
    /// permanently marked enforce that above (see
    /// [`TableConfig::lock_free_space`](crate::table::TableConfig)).
    pub fn toggle(&mut self, row: usize, col: usize) -> GameResult<bool> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::MarkOutOfBounds {
                row: row as i64,
                col: col as i64,
            });
        }
        self.0[row][col] = !self.0[row][col];
        Ok(self.0[row][col])
    }

    /// The full grid, row-major.
    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.0
    }
}

impl Default for MarkGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[bool; GRID_SIZE]; GRID_SIZE]> for MarkGrid {
    fn from(marks: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(marks)
    }
}

/// A fully marked five-cell line.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum WinningLine {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "Row {}", row + 1),
            Self::Column(col) => match ColumnLetter::for_column(*col) {
                Some(letter) => write!(f, "Column {letter}"),
                None => write!(f, "Column {col}"),
            },
            Self::MainDiagonal => write!(f, "Diagonal (top-left to bottom-right)"),
            Self::AntiDiagonal => write!(f, "Diagonal (top-right to bottom-left)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Letter Tests ===

    #[test]
    fn test_letter_for_range_boundaries() {
        assert_eq!(ColumnLetter::letter_for(1), Some(ColumnLetter::B));
        assert_eq!(ColumnLetter::letter_for(15), Some(ColumnLetter::B));
        assert_eq!(ColumnLetter::letter_for(16), Some(ColumnLetter::I));
        assert_eq!(ColumnLetter::letter_for(31), Some(ColumnLetter::N));
        assert_eq!(ColumnLetter::letter_for(46), Some(ColumnLetter::G));
        assert_eq!(ColumnLetter::letter_for(61), Some(ColumnLetter::O));
        assert_eq!(ColumnLetter::letter_for(75), Some(ColumnLetter::O));
    }

    #[test]
    fn test_letter_for_out_of_range() {
        assert_eq!(ColumnLetter::letter_for(0), None);
        assert_eq!(ColumnLetter::letter_for(76), None);
    }

    // === Card Tests ===

    #[test]
    fn test_generated_card_has_free_center() {
        let card = Card::generate();
        assert_eq!(card.cell(FREE_ROW, FREE_COL), Some(Cell::Free));
    }

    #[test]
    fn test_generated_card_columns_in_range_and_distinct() {
        let card = Card::generate();
        for (col, &(lo, hi)) in COLUMN_RANGES.iter().enumerate() {
            let mut seen = Vec::new();
            for row in 0..GRID_SIZE {
                match card.cell(row, col) {
                    Some(Cell::Free) => {
                        assert_eq!((row, col), (FREE_ROW, FREE_COL));
                    }
                    Some(Cell::Number(n)) => {
                        assert!((lo..=hi).contains(&n), "{n} outside column {col} range");
                        assert!(!seen.contains(&n), "{n} repeated in column {col}");
                        seen.push(n);
                    }
                    None => panic!("missing cell ({row}, {col})"),
                }
            }
        }
    }

    #[test]
    fn test_cell_wire_format() {
        let json = serde_json::to_string(&Cell::Free).unwrap();
        assert_eq!(json, "\"FREE\"");
        let json = serde_json::to_string(&Cell::Number(42)).unwrap();
        assert_eq!(json, "42");

        let card = Card::generate();
        let round_trip: Card = serde_json::from_str(&serde_json::to_string(&card).unwrap()).unwrap();
        assert_eq!(card, round_trip);
    }

    // === MarkGrid Tests ===

    #[test]
    fn test_fresh_grid_marks_only_the_free_cell() {
        let marks = MarkGrid::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let expected = (row, col) == (FREE_ROW, FREE_COL);
                assert_eq!(marks.is_marked(row, col), expected);
            }
        }
    }

    #[test]
    fn test_toggle_flips_and_reports_state() {
        let mut marks = MarkGrid::new();
        assert_eq!(marks.toggle(0, 0), Ok(true));
        assert!(marks.is_marked(0, 0));
        assert_eq!(marks.toggle(0, 0), Ok(false));
        assert!(!marks.is_marked(0, 0));
    }

    #[test]
    fn test_toggle_out_of_bounds_leaves_grid_unchanged() {
        let mut marks = MarkGrid::new();
        let before = marks.clone();
        assert_eq!(
            marks.toggle(GRID_SIZE, 0),
            Err(GameError::MarkOutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(marks, before);
    }

    // The free space is deliberately toggleable: unmarking it is preserved
    // behavior, opt out with TableConfig::lock_free_space.
    #[test]
    fn test_toggle_free_cell_is_allowed() {
        let mut marks = MarkGrid::new();
        assert_eq!(marks.toggle(FREE_ROW, FREE_COL), Ok(false));
        assert!(!marks.is_marked(FREE_ROW, FREE_COL));
    }

    // === WinningLine Tests ===

    #[test]
    fn test_winning_line_labels() {
        assert_eq!(WinningLine::Row(0).to_string(), "Row 1");
        assert_eq!(WinningLine::Row(4).to_string(), "Row 5");
        assert_eq!(WinningLine::Column(0).to_string(), "Column B");
        assert_eq!(WinningLine::Column(4).to_string(), "Column O");
        assert_eq!(
            WinningLine::MainDiagonal.to_string(),
            "Diagonal (top-left to bottom-right)"
        );
        assert_eq!(
            WinningLine::AntiDiagonal.to_string(),
            "Diagonal (top-right to bottom-left)"
        );
    }
}
