//! Turn sequencing and game status for tic-tac-toe.

use super::board::{Board, PlaceError};
use super::player::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Player};
use super::rules;
use super::types::{Coord, Marker};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const TIE_MESSAGE: &str = "Tie game. Better luck next time!";
const INVALID_MOVE_MESSAGE: &str = "This spot is already taken, please choose another.";
const FINISHED_MESSAGE: &str = "The game is over. Start a new game to keep playing.";

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for this marker.
    Won(Marker),
    /// Board filled with no winner.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has been won or tied.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What happened when a turn was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Marker placed; the other player is now active.
    Continue,
    /// Cell was occupied; nothing changed.
    Invalid,
    /// Marker placed and completed a triple; the active player won.
    Win,
    /// Marker placed and filled the board without a winner.
    Tie,
    /// The game had already ended; nothing changed.
    Finished,
}

/// Which of the two players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Seat {
    One,
    Two,
}

impl Seat {
    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Created once per session and reset in place, so player names survive
/// between games. Player one always holds [`Marker::X`] and moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: Seat,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_names(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }

    /// Creates a new game with the given player names.
    ///
    /// Blank names fall back to the defaults.
    #[instrument(skip_all, fields(one = %one.as_ref(), two = %two.as_ref()))]
    pub fn with_names(one: impl AsRef<str>, two: impl AsRef<str>) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(one, Marker::X, DEFAULT_PLAYER_ONE),
                Player::new(two, Marker::O, DEFAULT_PLAYER_TWO),
            ],
            active: Seat::One,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player whose turn it is.
    ///
    /// After a win this is the winner.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning player, if the game has been won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(marker) => self.players.iter().find(|p| *p.marker() == marker),
            GameStatus::InProgress | GameStatus::Tied => None,
        }
    }

    /// Renames both players. A blank name keeps that player's current name.
    #[instrument(skip(self))]
    pub fn set_player_names(&mut self, one: &str, two: &str) {
        self.players[Seat::One.index()].rename(one);
        self.players[Seat::Two.index()].rename(two);
        info!(
            one = %self.players[0].name(),
            two = %self.players[1].name(),
            "Player names set"
        );
    }

    /// Plays the active player's marker at `coord`.
    ///
    /// A win is checked before a tie, so a board filled by a winning move
    /// is a win. On [`TurnOutcome::Invalid`] and [`TurnOutcome::Finished`]
    /// nothing changes. The active player only switches on
    /// [`TurnOutcome::Continue`].
    #[instrument(skip(self), fields(player = %self.active_player()))]
    pub fn play_turn(&mut self, coord: Coord) -> TurnOutcome {
        if self.status.is_over() {
            debug!(status = ?self.status, "Turn attempted after game ended");
            return TurnOutcome::Finished;
        }

        let marker = *self.active_player().marker();
        if let Err(PlaceError::Occupied(_)) = self.board.place(coord, marker) {
            debug!("Invalid move");
            return TurnOutcome::Invalid;
        }

        if rules::check_winner(&self.board).is_some() {
            info!(winner = %self.active_player(), "Game won");
            self.status = GameStatus::Won(marker);
            return TurnOutcome::Win;
        }

        if rules::is_full(&self.board) {
            info!("Game tied");
            self.status = GameStatus::Tied;
            return TurnOutcome::Tie;
        }

        self.active = self.active.other();
        debug!(
            board = %self.board,
            next = %self.active_player().name(),
            "New round"
        );
        TurnOutcome::Continue
    }

    /// Clears the board and gives the first turn back to player one.
    ///
    /// Player names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = Seat::One;
        self.status = GameStatus::InProgress;
        debug!("Game reset");
    }

    /// Returns `"{name} wins!"` once the game has been won.
    pub fn declare_winner(&self) -> Option<String> {
        self.winner().map(|player| format!("{} wins!", player.name()))
    }

    /// Returns the tie announcement.
    pub fn declare_tie(&self) -> &'static str {
        TIE_MESSAGE
    }

    /// Returns the message shown when a cell is already taken.
    pub fn invalid_move(&self) -> &'static str {
        INVALID_MOVE_MESSAGE
    }

    /// Returns the prompt naming the active player.
    pub fn turn_prompt(&self) -> String {
        format!("{}'s turn...", self.active_player().name())
    }

    /// Returns the message a frontend shows for `outcome`, if any.
    pub fn announcement(&self, outcome: TurnOutcome) -> Option<String> {
        match outcome {
            TurnOutcome::Continue => None,
            TurnOutcome::Invalid => Some(self.invalid_move().to_string()),
            TurnOutcome::Win => self.declare_winner(),
            TurnOutcome::Tie => Some(self.declare_tie().to_string()),
            TurnOutcome::Finished => Some(FINISHED_MESSAGE.to_string()),
        }
    }
}

/// A deserialized game that could not arise from legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// Player one must hold X and player two O.
    #[display("Players must hold markers [X, O]")]
    WrongMarkers,
    /// A player name is empty or whitespace.
    #[display("Player names must not be blank")]
    BlankName,
    /// Marker counts cannot come from alternating turns starting with X.
    #[display("Board has {} X and {} O markers", x, o)]
    MarkerCounts {
        /// Number of X markers.
        x: usize,
        /// Number of O markers.
        o: usize,
    },
    /// Status disagrees with the board.
    #[display("Status {:?} does not match the board", status)]
    StatusMismatch {
        /// Status found in the snapshot.
        status: GameStatus,
    },
    /// Active player is not the one the board implies.
    #[display("Active player does not match the board")]
    WrongActivePlayer,
}

/// Unchecked game fields, validated into a [`Game`].
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    players: [Player; 2],
    active: Seat,
    status: GameStatus,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let GameSnapshot {
            board,
            players,
            active,
            status,
        } = snapshot;

        if *players[0].marker() != Marker::X || *players[1].marker() != Marker::O {
            return Err(SnapshotError::WrongMarkers);
        }
        if players.iter().any(|p| p.name().trim().is_empty()) {
            return Err(SnapshotError::BlankName);
        }

        let count = |marker| {
            board
                .get()
                .iter()
                .flatten()
                .filter(|cell| cell.marker() == Some(marker))
                .count()
        };
        let (x, o) = (count(Marker::X), count(Marker::O));
        if x != o && x != o + 1 {
            return Err(SnapshotError::MarkerCounts { x, o });
        }

        // Player who placed the last marker.
        let last_mover = if x == o { Seat::Two } else { Seat::One };
        let winner = rules::check_winner(&board);
        let full = rules::is_full(&board);

        let expected_active = match status {
            GameStatus::InProgress if winner.is_none() && !full => {
                if x == o { Seat::One } else { Seat::Two }
            }
            GameStatus::Won(marker)
                if winner == Some(marker) && *players[last_mover.index()].marker() == marker =>
            {
                last_mover
            }
            GameStatus::Tied if winner.is_none() && full => last_mover,
            status => return Err(SnapshotError::StatusMismatch { status }),
        };
        if active != expected_active {
            return Err(SnapshotError::WrongActivePlayer);
        }

        Ok(Self {
            board,
            players,
            active,
            status,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
