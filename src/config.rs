//! Session configuration. There are no config files; everything starts from defaults.

/// Settings a session starts with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionConfig {
    /// Initial round capacity (changed later with `capacity <n>`).
    pub capacity: usize,
    /// Prompt printed before each command.
    pub prompt: String,
    /// Fixed RNG seed for reproducible draws; `None` seeds from the OS.
    pub seed: Option<u64>,
}

fn default_prompt() -> String {
    ">>> ".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            prompt: default_prompt(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Default config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
