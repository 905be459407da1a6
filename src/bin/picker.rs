//! Interactive player picker.
//! Run with: cargo run --bin picker
//! Set RUST_LOG=info to see roster changes and picks logged to stderr.

use player_picker::{Session, SessionConfig};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = SessionConfig::default();
    let mut session = Session::new(&config);
    log::info!("Session started (capacity {})", config.capacity);

    let mut stdout = io::stdout();
    writeln!(stdout, "Player Picker!")?;
    writeln!(stdout, "Enter \"h\" or \"help\" for help.")?;

    session.run(io::stdin().lock(), &mut stdout)?;

    log::info!("Session ended after {} round(s)", session.roster().rounds_played());
    Ok(())
}
