//! Data structures for the player picker: players, roster, and round results.

mod player;
mod roster;
mod round;

pub use player::{Player, PlayerStatus};
pub use roster::{PlayerListing, Roster, RosterError, RESERVED_NAME};
pub use round::{Pick, Round};
