//! Players and their markers.

use super::types::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Name given to player one when none is supplied.
pub const DEFAULT_PLAYER_ONE: &str = "Player One";

/// Name given to player two when none is supplied.
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// A named participant holding one marker for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl Player {
    /// Creates a player. A blank name falls back to `fallback`.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub(crate) fn new(name: impl AsRef<str>, marker: Marker, fallback: &str) -> Self {
        let name = name.as_ref().trim();
        let name = if name.is_empty() { fallback } else { name };
        Self {
            name: name.to_string(),
            marker,
        }
    }

    /// Renames the player. Blank names are ignored.
    #[instrument(skip(self, name), fields(old = %self.name, new = %name))]
    pub(crate) fn rename(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            debug!("Blank name, keeping current");
            return;
        }
        self.name = name.to_string();
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
