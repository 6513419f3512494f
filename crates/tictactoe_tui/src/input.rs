//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe::{Coord, SIZE};

/// Moves the cursor with arrow keys or `hjkl`. Stops at the board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let last = SIZE - 1;

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
        _ => (row, col),
    };

    Coord::new(row, col).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to cells in reading order.
pub fn digit_cell(key: KeyCode) -> Option<Coord> {
    match key {
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            digit.checked_sub(1).and_then(Coord::from_index)
        }
        _ => None,
    }
}
