//! 3x3 board storage with write-once cells.

use super::types::{Cell, Coord, Marker, SIZE};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when placing a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Coord),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a read-only view of the grid, indexed `[row][col]`.
    pub fn get(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord).is_empty()
    }

    /// Iterates over the empty cells in reading order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|coord| self.is_empty(*coord))
    }

    /// Places `marker` at `coord` if that cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Occupied`] if the cell already holds a marker.
    /// The board is left unchanged in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, marker: Marker) -> Result<(), PlaceError> {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if !cell.is_empty() {
            debug!(%coord, "Cell already occupied");
            return Err(PlaceError::Occupied(coord));
        }
        *cell = Cell::Marked(marker);
        Ok(())
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line = row
                .iter()
                .map(|cell| format!(" {} ", cell))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_board_succeeds_everywhere() {
        for coord in Coord::ALL {
            let mut board = Board::new();
            assert_eq!(board.place(coord, Marker::X), Ok(()));
            assert_eq!(board.cell(coord), Cell::Marked(Marker::X));
        }
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        for coord in Coord::ALL {
            for first in [Marker::X, Marker::O] {
                let mut board = Board::new();
                board.place(coord, first).unwrap();
                let before = board.clone();

                for second in [Marker::X, Marker::O] {
                    assert_eq!(board.place(coord, second), Err(PlaceError::Occupied(coord)));
                }
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn test_place_error_message() {
        let err = PlaceError::Occupied(Coord::at(2, 1));
        assert_eq!(err.to_string(), "Cell (2, 1) is already occupied");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_get_is_row_major() {
        let mut board = Board::new();
        board.place(Coord::at(0, 2), Marker::O).unwrap();
        assert_eq!(board.get()[0][2], Cell::Marked(Marker::O));
        assert_eq!(board.get()[2][0], Cell::Empty);
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::new();
        for (i, coord) in Coord::ALL.into_iter().enumerate() {
            let marker = if i % 2 == 0 { Marker::X } else { Marker::O };
            board.place(coord, marker).unwrap();
        }
        assert_eq!(board.empty_cells().count(), 0);

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_display_table() {
        let mut board = Board::new();
        board.place(Coord::at(0, 0), Marker::X).unwrap();
        board.place(Coord::at(1, 1), Marker::O).unwrap();
        let expected = " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   \n";
        assert_eq!(board.to_string(), expected);
    }
}
