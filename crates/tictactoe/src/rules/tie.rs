//! Tie detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell remains).
///
/// A full board with no winner is a tie. Callers check for a win first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.get().iter().flatten().all(|cell| *cell != Cell::Empty)
}
