//! Round and Pick: the outcome of one selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One player picked for a round, with their play count after the round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub name: String,
    pub games_played: u32,
}

/// A completed round: who was picked, in pick order (guaranteed players first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    pub played_at: DateTime<Utc>,
    pub picks: Vec<Pick>,
}

impl Round {
    pub fn new(number: u32, picks: Vec<Pick>) -> Self {
        Self {
            number,
            played_at: Utc::now(),
            picks,
        }
    }

    /// Whether the named player was picked this round.
    pub fn contains(&self, name: &str) -> bool {
        self.picks.iter().any(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
