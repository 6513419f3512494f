//! Tic-tac-toe game state.
//!
//! A 3x3 [`Board`] of write-once cells, two [`Player`]s and a [`Game`] that
//! sequences turns and evaluates wins and ties after every move. Rendering
//! is left to the caller: frontends read the board and the announcement
//! strings and feed coordinates back through [`Game::play_turn`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{Coord, Game, TurnOutcome};
//!
//! # fn main() -> Result<(), tictactoe::CoordError> {
//! let mut game = Game::with_names("Ada", "Grace");
//! assert_eq!(game.play_turn(Coord::new(1, 1)?), TurnOutcome::Continue);
//! assert_eq!(game.play_turn(Coord::new(1, 1)?), TurnOutcome::Invalid);
//! assert_eq!(game.turn_prompt(), "Grace's turn...");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod player;
pub mod rules;
mod types;

pub use board::{Board, PlaceError};
pub use game::{Game, GameStatus, SnapshotError, TurnOutcome};
pub use player::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Player};
pub use types::{Cell, Coord, CoordError, Marker, SIZE};
