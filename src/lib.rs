//! Player picker: a roster of players and a fair picker for who plays the next round.

pub mod config;
pub mod logic;
pub mod models;
pub mod session;

pub use config::SessionConfig;
pub use logic::pick_players;
pub use models::{Pick, Player, PlayerListing, PlayerStatus, Roster, RosterError, Round, RESERVED_NAME};
pub use session::{Command, CommandError, PlayerAction, Session, Target};
