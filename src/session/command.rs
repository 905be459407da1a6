//! Command parsing: one line of input to a [`Command`].

use crate::models::RESERVED_NAME;

/// Errors from parsing a command line. All are usage errors; the session keeps running.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandError {
    /// First word is not a known command.
    Unrecognized(String),
    /// `player` with nothing after it.
    MissingPlayerAction,
    /// `player <action>` where the action is unknown.
    UnknownPlayerAction(String),
    /// `player add|remove|sit|unsit` without a name.
    MissingName { action: &'static str },
    /// `capacity` without a number.
    MissingCapacity,
    /// `capacity` with something that is not a non-negative integer.
    InvalidCapacity(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Unrecognized(input) => write!(f, "\"{}\" is not a recognized command.", input),
            CommandError::MissingPlayerAction => {
                write!(f, "Usage: player <add/remove/sit/unsit> name | player list")
            }
            CommandError::UnknownPlayerAction(action) => {
                write!(f, "\"{}\" is not a player action (add, remove, sit, unsit, list)", action)
            }
            CommandError::MissingName { action } => write!(f, "Usage: player {} <name>", action),
            CommandError::MissingCapacity => write!(f, "Usage: capacity <number>"),
            CommandError::InvalidCapacity(value) => {
                write!(f, "\"{}\" is not a valid capacity; expected a whole number", value)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Who `player unsit` applies to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    All,
    Named(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayerAction {
    Add(String),
    Remove(String),
    Sit(String),
    Unsit(Target),
    List,
}

/// A parsed command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Capacity(usize),
    Player(PlayerAction),
    /// Same as `player list`.
    List,
    Play,
    History,
    Export,
    Help,
    Stop,
}

impl Command {
    /// Parse one input line. Blank lines give `Ok(None)`.
    ///
    /// Keywords are matched case-insensitively; player names keep their case and
    /// multi-word names are joined with single spaces.
    pub fn parse(input: &str) -> Result<Option<Command>, CommandError> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();
        let head = head.to_ascii_lowercase();

        let command = match head.as_str() {
            "h" | "help" if rest.is_empty() => Command::Help,
            "list" if rest.is_empty() => Command::List,
            "play" if rest.is_empty() => Command::Play,
            "history" if rest.is_empty() => Command::History,
            "export" if rest.is_empty() => Command::Export,
            "stop" | "gg" | "ggs" if rest.is_empty() => Command::Stop,
            "player" | "players" => Command::Player(parse_player_action(&rest)?),
            "capacity" => Command::Capacity(parse_capacity(&rest)?),
            _ => return Err(CommandError::Unrecognized(input.trim().to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_player_action(params: &[&str]) -> Result<PlayerAction, CommandError> {
    let (action, name_words) = params
        .split_first()
        .ok_or(CommandError::MissingPlayerAction)?;
    let name = name_words.join(" ");
    let require_name = |action: &'static str| {
        if name.is_empty() {
            Err(CommandError::MissingName { action })
        } else {
            Ok(name.clone())
        }
    };

    match action.to_ascii_lowercase().as_str() {
        "list" => Ok(PlayerAction::List),
        "add" => require_name("add").map(PlayerAction::Add),
        "remove" | "rm" => require_name("remove").map(PlayerAction::Remove),
        "sit" => require_name("sit").map(PlayerAction::Sit),
        "unsit" => {
            let name = require_name("unsit")?;
            if name.eq_ignore_ascii_case(RESERVED_NAME) {
                Ok(PlayerAction::Unsit(Target::All))
            } else {
                Ok(PlayerAction::Unsit(Target::Named(name)))
            }
        }
        _ => Err(CommandError::UnknownPlayerAction(action.to_string())),
    }
}

fn parse_capacity(params: &[&str]) -> Result<usize, CommandError> {
    match params {
        [] => Err(CommandError::MissingCapacity),
        [value] => value
            .parse::<usize>()
            .map_err(|_| CommandError::InvalidCapacity(value.to_string())),
        _ => Err(CommandError::InvalidCapacity(params.join(" "))),
    }
}

/// Help lines: command syntax and what it does.
pub const COMMANDS: &[(&str, &str)] = &[
    ("capacity <num>", "set the number of players per round"),
    ("help, h", "show list of commands"),
    ("player <add/remove/sit/unsit> name", "add, remove, sit, or unsit a player"),
    ("player unsit all", "bring every sitting player back in"),
    ("player list, list", "list all players and their status"),
    ("play", "pick the next set of players"),
    ("history", "show the players picked in each round so far"),
    ("export", "print the roster and round history as JSON"),
    ("stop, gg, ggs", "end the session"),
];
