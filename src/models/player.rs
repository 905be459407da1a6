//! Player and PlayerStatus data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a player is eligible for the next round.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Active,
    /// Sitting out; never picked until unsat.
    Sitting,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStatus::Active => write!(f, "active"),
            PlayerStatus::Sitting => write!(f, "sitting"),
        }
    }
}

/// A player on the roster. The name is the player's identity for the whole session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub active: bool,
    /// Number of rounds this player has been picked for.
    pub games_played: u32,
}

impl Player {
    /// Create an active player with a given play count (used to seed late joiners).
    pub fn with_games_played(name: impl Into<String>, games_played: u32) -> Self {
        Self {
            name: name.into(),
            active: true,
            games_played,
        }
    }

    pub fn status(&self) -> PlayerStatus {
        if self.active {
            PlayerStatus::Active
        } else {
            PlayerStatus::Sitting
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Take the player out of the selection pool.
    pub fn sit(&mut self) {
        self.active = false;
    }

    /// Put the player back into the selection pool.
    pub fn unsit(&mut self) {
        self.active = true;
    }

    /// Record that this player was picked for a round. Returns the new play count.
    pub fn record_play(&mut self) -> u32 {
        self.games_played += 1;
        self.games_played
    }
}
