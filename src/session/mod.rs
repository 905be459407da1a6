//! Interactive session: command parsing and dispatch.

mod command;
mod dispatch;

pub use command::{Command, CommandError, PlayerAction, Target, COMMANDS};
pub use dispatch::Session;
