//! Board coordinates.
//!
//! The Acquire board has 12 columns (`1..=12`) and 9 rows (`A..=I`), giving
//! 108 positions. Each position corresponds to exactly one tile.
//!
//! ## Ordering
//!
//! Positions are ordered row-major: `1A < 2A < ... < 12A < 1B < ...`.
//! Every "first" lookup in the rules (and every deterministic iteration over
//! a set of positions) uses this order.
//!
//! ## Text Form
//!
//! ```
//! use rust_acquire::core::Position;
//!
//! let pos: Position = "11C".parse().unwrap();
//! assert_eq!(pos.column(), 11);
//! assert_eq!(pos.row(), 'C');
//! assert_eq!(pos.to_string(), "11C");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Number of board columns.
pub const COLUMNS: u8 = 12;

/// Number of board rows.
pub const ROWS: u8 = 9;

/// Total number of positions (and tiles).
pub const POSITION_COUNT: usize = COLUMNS as usize * ROWS as usize;

/// A board coordinate.
///
/// Field order matters: the derived `Ord` compares `row` first, which gives
/// the row-major ordering the rules depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    /// Row index, 0-based (`A` = 0).
    row: u8,
    /// Column number, 1-based.
    col: u8,
}

impl Position {
    /// Create a position from a column (`1..=12`) and row letter (`'A'..='I'`).
    ///
    /// Returns `None` if either coordinate is off the board.
    #[must_use]
    pub fn new(column: u8, row: char) -> Option<Self> {
        let row = row.to_ascii_uppercase();
        if !(1..=COLUMNS).contains(&column) || !('A'..='I').contains(&row) {
            return None;
        }
        Some(Self {
            row: row as u8 - b'A',
            col: column,
        })
    }

    /// Create a position from its row-major index (`0..108`).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= POSITION_COUNT {
            return None;
        }
        Some(Self {
            row: (index / COLUMNS as usize) as u8,
            col: (index % COLUMNS as usize) as u8 + 1,
        })
    }

    /// Row-major index of this position (`0..108`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * COLUMNS as usize + (self.col as usize - 1)
    }

    /// Column number (`1..=12`).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.col
    }

    /// Row letter (`'A'..='I'`).
    #[must_use]
    pub const fn row(self) -> char {
        (b'A' + self.row) as char
    }

    /// Iterate over all 108 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..POSITION_COUNT).filter_map(Position::from_index)
    }

    /// Positions at Manhattan distance exactly 1, in row-major order.
    #[must_use]
    pub fn adjacent(self) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if self.row > 0 {
            out.push(Self { row: self.row - 1, col: self.col });
        }
        if self.col > 1 {
            out.push(Self { row: self.row, col: self.col - 1 });
        }
        if self.col < COLUMNS {
            out.push(Self { row: self.row, col: self.col + 1 });
        }
        if self.row + 1 < ROWS {
            out.push(Self { row: self.row + 1, col: self.col });
        }
        out
    }

    /// Check whether two positions are adjacent.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col, self.row())
    }
}

/// Error parsing a position from text.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid board position: {_0:?}")]
pub struct ParsePositionError(#[error(not(source))] pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let trimmed = s.trim();
        let row = trimmed.chars().last().ok_or_else(err)?;
        let digits = &trimmed[..trimmed.len() - row.len_utf8()];
        let column: u8 = digits.parse().map_err(|_| err())?;
        Position::new(column, row).ok_or_else(err)
    }
}

impl TryFrom<String> for Position {
    type Error = ParsePositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.to_string()
    }
}
