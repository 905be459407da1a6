//! Roster: the players of a session, the round capacity, and rounds played.

use crate::models::player::{Player, PlayerStatus};
use serde::Serialize;

/// Name reserved for bulk operations (`player unsit all`); no player may take it.
pub const RESERVED_NAME: &str = "all";

/// Errors that can occur during roster operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Name is empty after trimming.
    EmptyName,
    /// Name collides with the bulk keyword.
    ReservedName,
    /// A player with this name already exists (names are unique, case-sensitive).
    DuplicatePlayerName(String),
    /// No player with this name.
    PlayerNotFound(String),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "Player name cannot be empty"),
            RosterError::ReservedName => {
                write!(f, "\"{}\" is reserved and cannot be used as a player name", RESERVED_NAME)
            }
            RosterError::DuplicatePlayerName(name) => write!(f, "{} is already playing", name),
            RosterError::PlayerNotFound(name) => write!(f, "{} is not playing", name),
        }
    }
}

impl std::error::Error for RosterError {}

/// All players in a session, in the order they joined.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Roster {
    players: Vec<Player>,
    /// Configured number of players per round.
    capacity: usize,
    rounds_played: u32,
}

impl Roster {
    /// Create an empty roster with the given round capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            players: Vec::new(),
            capacity,
            rounds_played: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Set the configured round capacity. No upper bound; rounds clamp to the active count.
    pub fn set_capacity(&mut self, capacity: usize) {
        log::debug!("capacity {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Look up a player by name. Surrounding whitespace is ignored, as on add.
    pub fn get_player(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players.iter().find(|p| p.name == name)
    }

    pub(crate) fn get_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        let name = name.trim();
        self.players.iter_mut().find(|p| p.name == name)
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Count a finished round. Returns the number of the round just finished.
    pub(crate) fn finish_round(&mut self) -> u32 {
        self.rounds_played += 1;
        self.rounds_played
    }

    /// Play count given to a player joining now: one less than the rounds played so far.
    pub fn seed_games_played(&self) -> u32 {
        self.rounds_played.saturating_sub(1)
    }

    /// Add a new active player, seeded with [`Roster::seed_games_played`].
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<&Player, RosterError> {
        let seed = self.seed_games_played();
        let name = name.into();
        self.insert_player(Player::with_games_played(name.trim(), seed))
    }

    /// Add a pre-built player record. Names must be non-empty, unique and not reserved.
    pub fn insert_player(&mut self, mut player: Player) -> Result<&Player, RosterError> {
        let name_trimmed = player.name.trim();
        if name_trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if name_trimmed.eq_ignore_ascii_case(RESERVED_NAME) {
            return Err(RosterError::ReservedName);
        }
        if self.get_player(name_trimmed).is_some() {
            return Err(RosterError::DuplicatePlayerName(name_trimmed.to_string()));
        }
        player.name = name_trimmed.to_string();
        log::info!("{} added ({} games played)", player.name, player.games_played);
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player by name, returning the removed record.
    pub fn remove_player(&mut self, name: &str) -> Result<Player, RosterError> {
        let name = name.trim();
        let idx = self
            .players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| RosterError::PlayerNotFound(name.to_string()))?;
        log::info!("{} removed", name);
        Ok(self.players.remove(idx))
    }

    /// Mark a player as sitting out.
    pub fn sit_player(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        self.get_player_mut(name)
            .ok_or_else(|| RosterError::PlayerNotFound(name.to_string()))?
            .sit();
        log::info!("{} is sitting out", name);
        Ok(())
    }

    /// Bring a sitting player back into the pool.
    pub fn unsit_player(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        self.get_player_mut(name)
            .ok_or_else(|| RosterError::PlayerNotFound(name.to_string()))?
            .unsit();
        log::info!("{} is no longer sitting", name);
        Ok(())
    }

    /// Bring every player back into the pool. Returns how many were sitting.
    pub fn unsit_all(&mut self) -> usize {
        let mut count = 0;
        for p in self.players.iter_mut().filter(|p| !p.active) {
            p.unsit();
            count += 1;
        }
        log::info!("all players are in ({} were sitting)", count);
        count
    }

    /// Active players in roster order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Players in the next round: `min(capacity, active players)`.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.min(self.active_count())
    }

    /// Read-only view of the roster for display.
    pub fn list(&self) -> PlayerListing<'_> {
        PlayerListing {
            players: &self.players,
            active: self.active_count(),
            capacity: self.capacity,
        }
    }
}

/// Borrowed roster listing: each player's name and status plus summary counts.
///
/// `entries()` can be called any number of times; each call walks the roster from the start.
#[derive(Clone, Copy, Debug)]
pub struct PlayerListing<'a> {
    players: &'a [Player],
    pub active: usize,
    pub capacity: usize,
}

impl<'a> PlayerListing<'a> {
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, PlayerStatus)> + 'a {
        let players: &'a [Player] = self.players;
        players.iter().map(|p| (p.name.as_str(), p.status()))
    }
}

impl<'a> IntoIterator for PlayerListing<'a> {
    type Item = (&'a str, PlayerStatus);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, PlayerStatus)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.entries())
    }
}
