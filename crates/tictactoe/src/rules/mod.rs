//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game engine and frontends can evaluate any board.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{TRIPLES, check_winner};
