//! Picker business logic: choosing the players for each round.

mod selection;

pub use selection::pick_players;
