//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Symbol a player places in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Marker {
    /// Player one's marker (moves first).
    X,
    /// Player two's marker.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single grid position.
///
/// Cells are write-once: the board never turns a marked cell back into
/// another marker, only [`Board::reset`](crate::Board::reset) empties it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker yet.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Returns true if no marker has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(marker) => write!(f, "{}", marker),
        }
    }
}

/// A board coordinate. Row 0 is the top row, column 0 the left column.
///
/// Only coordinates inside the 3x3 grid can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in reading order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= SIZE {
            return Err(CoordError::RowOutOfRange(row));
        }
        if col >= SIZE {
            return Err(CoordError::ColumnOutOfRange(col));
        }
        Ok(Self::at(row, col))
    }

    /// Creates a coordinate from a reading-order index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    // Callers guarantee both values are below SIZE.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row of this coordinate (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this coordinate (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Reading-order index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A coordinate outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    /// Row index is 3 or more.
    #[display("Row {} is out of range (must be 0-2)", _0)]
    RowOutOfRange(#[error(not(source))] usize),
    /// Column index is 3 or more.
    #[display("Column {} is out of range (must be 0-2)", _0)]
    ColumnOutOfRange(#[error(not(source))] usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_ok());
        assert_eq!(Coord::new(3, 0), Err(CoordError::RowOutOfRange(3)));
        assert_eq!(Coord::new(0, 7), Err(CoordError::ColumnOutOfRange(7)));
    }

    #[test]
    fn test_coord_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoordError::RowOutOfRange(4));
        assert_eq!(err.to_string(), "Row 4 is out of range (must be 0-2)");
        assert!(std::error::Error::source(err.as_ref()).is_none());
    }

    #[test]
    fn test_coord_index_matches_all() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_marker_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Empty.to_string(), " ");
        assert_eq!(Cell::Marked(Marker::O).to_string(), "O");
    }
}
