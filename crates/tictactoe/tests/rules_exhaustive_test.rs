//! Exhaustive checks of the win and tie rules over every cell assignment.

use tictactoe::rules::{TRIPLES, check_winner, is_full};
use tictactoe::{Board, Cell, Coord, Marker};

/// Decodes `n` in base 3 into a board: 0 = empty, 1 = X, 2 = O.
fn board_from_code(mut n: u32) -> Board {
    let mut board = Board::new();
    for coord in Coord::ALL {
        match n % 3 {
            1 => board.place(coord, Marker::X).expect("fresh cell"),
            2 => board.place(coord, Marker::O).expect("fresh cell"),
            _ => {}
        }
        n /= 3;
    }
    board
}

/// Independent line check using raw indices instead of the rule table.
fn has_line(board: &Board) -> bool {
    let g = board.get();
    let same = |a: Cell, b: Cell, c: Cell| a != Cell::Empty && a == b && b == c;
    (0..3).any(|i| same(g[i][0], g[i][1], g[i][2]) || same(g[0][i], g[1][i], g[2][i]))
        || same(g[0][0], g[1][1], g[2][2])
        || same(g[0][2], g[1][1], g[2][0])
}

#[test]
fn test_winner_matches_reference_for_all_boards() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        assert_eq!(
            check_winner(&board).is_some(),
            has_line(&board),
            "board:\n{}",
            board
        );
    }
}

#[test]
fn test_full_boards_without_line_never_win() {
    let mut ties = 0;
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        if is_full(&board) && !has_line(&board) {
            assert_eq!(check_winner(&board), None);
            ties += 1;
        }
    }
    assert!(ties > 0);
}

#[test]
fn test_triple_table_is_distinct() {
    for (i, a) in TRIPLES.iter().enumerate() {
        for b in &TRIPLES[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
