//! Session: one roster, its round history, and the command dispatcher.

use crate::config::SessionConfig;
use crate::logic::pick_players;
use crate::models::{Roster, RosterError, Round};
use crate::session::command::{Command, PlayerAction, Target, COMMANDS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// An interactive picking session. Owns its roster; nothing is shared between sessions.
pub struct Session {
    roster: Roster,
    history: Vec<Round>,
    rng: StdRng,
    prompt: String,
    running: bool,
}

/// JSON view used by `export`.
#[derive(Serialize)]
struct Snapshot<'a> {
    roster: &'a Roster,
    history: &'a [Round],
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            roster: Roster::new(config.capacity),
            history: Vec::new(),
            rng,
            prompt: config.prompt.clone(),
            running: true,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// False once `stop` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one selection round and keep it in the history.
    pub fn play_round(&mut self) -> &Round {
        let round = pick_players(&mut self.roster, &mut self.rng);
        self.history.push(round);
        &self.history[self.history.len() - 1]
    }

    /// Read commands from `input` until `stop` or end of input, writing prompts and
    /// replies to `output`. Bytes that are not valid UTF-8 are replaced, never fatal.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        while self.running {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // EOF ends the session like `stop`.
                writeln!(output)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            for reply in self.execute_line(&line) {
                writeln!(output, "{}", reply)?;
            }
        }
        Ok(())
    }

    /// Parse and execute one input line. Returns the lines to show the user.
    pub fn execute_line(&mut self, input: &str) -> Vec<String> {
        match Command::parse(input) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::debug!("rejected input {:?}: {:?}", input, e);
                vec![e.to_string()]
            }
        }
    }

    /// Execute a command. Returns the lines to show the user.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Capacity(capacity) => {
                self.roster.set_capacity(capacity);
                vec![format!("Game capacity set to {}", capacity)]
            }
            Command::Player(action) => self.execute_player(action),
            Command::List => self.player_list(),
            Command::Play => self.play(),
            Command::History => self.history_lines(),
            Command::Export => self.export(),
            Command::Help => help_lines(),
            Command::Stop => {
                self.running = false;
                vec!["GGs".to_string()]
            }
        }
    }

    fn execute_player(&mut self, action: PlayerAction) -> Vec<String> {
        let result: Result<String, RosterError> = match action {
            PlayerAction::List => return self.player_list(),
            PlayerAction::Add(name) => self
                .roster
                .add_player(name)
                .map(|p| format!("{} added!", p.name)),
            PlayerAction::Remove(name) => self
                .roster
                .remove_player(&name)
                .map(|p| format!("{} has been removed.", p.name)),
            PlayerAction::Sit(name) => self
                .roster
                .sit_player(&name)
                .map(|()| format!("{} is now sitting out", name)),
            PlayerAction::Unsit(Target::Named(name)) => self
                .roster
                .unsit_player(&name)
                .map(|()| format!("{} is no longer sitting", name)),
            PlayerAction::Unsit(Target::All) => {
                self.roster.unsit_all();
                Ok("All players are in!".to_string())
            }
        };
        vec![result.unwrap_or_else(|e| e.to_string())]
    }

    fn player_list(&self) -> Vec<String> {
        let listing = self.roster.list();
        let mut lines = vec![format!(
            "All Players: ({} active/{} capacity)",
            listing.active, listing.capacity
        )];
        lines.extend(
            listing
                .entries()
                .map(|(name, status)| format!("\t{} ({})", name, status)),
        );
        lines
    }

    fn play(&mut self) -> Vec<String> {
        let round = self.play_round();
        if round.is_empty() {
            return vec!["No players available this round.".to_string()];
        }
        let mut lines = vec!["This rounds players:".to_string()];
        lines.extend(
            round
                .picks
                .iter()
                .map(|p| format!("\t{} is playing! ({})", p.name, p.games_played)),
        );
        lines
    }

    fn history_lines(&self) -> Vec<String> {
        if self.history.is_empty() {
            return vec!["No rounds played yet.".to_string()];
        }
        self.history
            .iter()
            .map(|round| {
                let names: Vec<&str> = round.picks.iter().map(|p| p.name.as_str()).collect();
                format!(
                    "Round {} ({}): {}",
                    round.number,
                    round.played_at.format("%H:%M:%S"),
                    if names.is_empty() { "-".to_string() } else { names.join(", ") }
                )
            })
            .collect()
    }

    fn export(&self) -> Vec<String> {
        let snapshot = Snapshot {
            roster: &self.roster,
            history: &self.history,
        };
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => json.lines().map(str::to_string).collect(),
            Err(e) => {
                log::error!("export failed: {}", e);
                vec![format!("Export failed: {}", e)]
            }
        }
    }
}

fn help_lines() -> Vec<String> {
    let width = COMMANDS.iter().map(|(syntax, _)| syntax.len()).max().unwrap_or(0);
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(syntax, about)| format!("\t{:<width$}  {}", syntax, about, width = width)),
    );
    lines
}
