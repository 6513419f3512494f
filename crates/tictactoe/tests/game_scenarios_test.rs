//! Scenario tests for full games played through the public API.

use tictactoe::{Board, Cell, Coord, Game, GameStatus, Marker, TurnOutcome};

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("coordinate in range")
}

fn play_all(game: &mut Game, moves: &[(usize, usize)]) -> Vec<TurnOutcome> {
    moves.iter().map(|&(r, col)| game.play_turn(c(r, col))).collect()
}

#[test]
fn test_top_row_win() {
    let mut game = Game::new();
    let outcomes = play_all(&mut game, &[(0, 0), (2, 0), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        outcomes,
        vec![
            TurnOutcome::Continue,
            TurnOutcome::Continue,
            TurnOutcome::Continue,
            TurnOutcome::Continue,
            TurnOutcome::Win,
        ]
    );
    assert_eq!(game.status(), GameStatus::Won(Marker::X));
    assert_eq!(game.declare_winner().as_deref(), Some("Player One wins!"));
}

#[test]
fn test_full_board_without_triple_is_tie() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    let outcomes = play_all(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(outcomes.last(), Some(&TurnOutcome::Tie));
    assert!(outcomes[..8].iter().all(|o| *o == TurnOutcome::Continue));
    assert_eq!(game.status(), GameStatus::Tied);
    assert!(game.winner().is_none());
    assert_eq!(game.announcement(TurnOutcome::Tie).as_deref(), Some(game.declare_tie()));
}

#[test]
fn test_winning_ninth_move_is_win_not_tie() {
    let mut game = Game::new();
    // X O O / O X X / X O X, the last X at (2,2) completes the diagonal.
    let outcomes = play_all(
        &mut game,
        &[(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (1, 0), (2, 0), (2, 1), (2, 2)],
    );

    assert_eq!(outcomes.last(), Some(&TurnOutcome::Win));
    assert!(outcomes[..8].iter().all(|o| *o == TurnOutcome::Continue));
    assert!(game.board().empty_cells().next().is_none());
    assert_eq!(game.status(), GameStatus::Won(Marker::X));
}

#[test]
fn test_occupied_cell_keeps_o_active() {
    let mut game = Game::new();
    assert_eq!(game.play_turn(c(0, 0)), TurnOutcome::Continue);
    let board_before = game.board().clone();

    assert_eq!(game.play_turn(c(0, 0)), TurnOutcome::Invalid);
    assert_eq!(game.board(), &board_before);
    assert_eq!(*game.active_player().marker(), Marker::O);
    assert_eq!(
        game.announcement(TurnOutcome::Invalid).as_deref(),
        Some("This spot is already taken, please choose another.")
    );
}

#[test]
fn test_reset_after_each_terminal_state() {
    let mut game = Game::with_names("Ada", "Grace");

    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(game.status().is_over());
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.active_player().name(), "Ada");
    assert_eq!(game.status(), GameStatus::InProgress);

    play_all(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(game.status(), GameStatus::Tied);
    game.reset();
    assert!(Coord::ALL.iter().all(|&coord| game.board().cell(coord) == Cell::Empty));
    assert_eq!(*game.active_player().marker(), Marker::X);

    // Reset mid-game with O to move.
    game.play_turn(c(1, 1));
    assert_eq!(*game.active_player().marker(), Marker::O);
    game.reset();
    assert_eq!(*game.active_player().marker(), Marker::X);
    assert_eq!(game.players()[1].name(), "Grace");
}

#[test]
fn test_game_serializes_snapshot() {
    let mut game = Game::with_names("Ada", "Grace");
    game.play_turn(c(0, 0));

    let json = serde_json::to_value(&game).expect("serialize game");
    assert_eq!(json["board"]["cells"][0][0], serde_json::json!({ "Marked": "X" }));
    assert_eq!(json["board"]["cells"][1][1], serde_json::json!("Empty"));
    assert_eq!(json["players"][1]["name"], serde_json::json!("Grace"));
    assert_eq!(json["status"], serde_json::json!("InProgress"));
}
