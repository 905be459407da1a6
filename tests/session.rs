//! Integration tests for command parsing and session dispatch.

use player_picker::{
    Command, CommandError, PlayerAction, Session, SessionConfig, Target,
};

fn session() -> Session {
    Session::new(&SessionConfig::seeded(9))
}

fn run(s: &mut Session, lines: &[&str]) -> Vec<String> {
    lines.iter().flat_map(|l| s.execute_line(l)).collect()
}

#[test]
fn parse_keywords_case_insensitively_and_keep_name_case() {
    assert_eq!(
        Command::parse("PLAYER Add Mary Jane").unwrap(),
        Some(Command::Player(PlayerAction::Add("Mary Jane".to_string())))
    );
    assert_eq!(
        Command::parse("players rm Bob").unwrap(),
        Some(Command::Player(PlayerAction::Remove("Bob".to_string())))
    );
    assert_eq!(Command::parse("gg").unwrap(), Some(Command::Stop));
    assert_eq!(Command::parse("H").unwrap(), Some(Command::Help));
    assert_eq!(Command::parse("   ").unwrap(), None);
}

#[test]
fn unsit_all_is_a_keyword_but_sit_all_is_a_name() {
    assert_eq!(
        Command::parse("player unsit all").unwrap(),
        Some(Command::Player(PlayerAction::Unsit(Target::All)))
    );
    assert_eq!(
        Command::parse("player sit all").unwrap(),
        Some(Command::Player(PlayerAction::Sit("all".to_string())))
    );
}

#[test]
fn parse_reports_usage_errors() {
    assert_eq!(
        Command::parse("player add").unwrap_err(),
        CommandError::MissingName { action: "add" }
    );
    assert_eq!(Command::parse("player").unwrap_err(), CommandError::MissingPlayerAction);
    assert_eq!(
        Command::parse("player kick Bob").unwrap_err(),
        CommandError::UnknownPlayerAction("kick".to_string())
    );
    assert_eq!(Command::parse("capacity").unwrap_err(), CommandError::MissingCapacity);
    assert_eq!(
        Command::parse("capacity four").unwrap_err(),
        CommandError::InvalidCapacity("four".to_string())
    );
    assert_eq!(
        Command::parse("capacity -1").unwrap_err(),
        CommandError::InvalidCapacity("-1".to_string())
    );
    assert_eq!(
        Command::parse("dance").unwrap_err(),
        CommandError::Unrecognized("dance".to_string())
    );
}

#[test]
fn errors_are_reported_and_session_keeps_running() {
    let mut s = session();
    let out = run(&mut s, &["dance", "player remove Zed", "capacity x"]);
    assert_eq!(
        out,
        [
            "\"dance\" is not a recognized command.",
            "Zed is not playing",
            "\"x\" is not a valid capacity; expected a whole number",
        ]
    );
    assert!(s.is_running());
}

#[test]
fn sit_all_does_not_touch_everyone() {
    let mut s = session();
    let out = run(&mut s, &["player add all", "player add Alice", "player sit all"]);
    assert_eq!(out[0], "\"all\" is reserved and cannot be used as a player name");
    assert_eq!(out[2], "all is not playing");
    assert_eq!(s.roster().active_count(), 1);
}

#[test]
fn play_round_updates_roster_and_history() {
    let mut s = session();
    run(
        &mut s,
        &["capacity 2", "player add Alice", "player add Bob", "player add Carol"],
    );
    let out = s.execute_line("play");
    assert_eq!(out[0], "This rounds players:");
    assert_eq!(out.len(), 3);
    assert!(out[1..].iter().all(|l| l.ends_with("is playing! (1)")));

    assert_eq!(s.history().len(), 1);
    assert_eq!(s.roster().rounds_played(), 1);
    let history = s.execute_line("history");
    assert_eq!(history.len(), 1);
    assert!(history[0].starts_with("Round 1 ("));
}

#[test]
fn play_with_no_players_is_an_empty_round() {
    let mut s = session();
    assert_eq!(s.execute_line("play"), ["No players available this round."]);
    assert_eq!(s.roster().rounds_played(), 1);
}

#[test]
fn list_shows_summary_and_status() {
    let mut s = session();
    run(&mut s, &["capacity 4", "player add Alice", "player add Bob", "player sit Bob"]);
    let expected = [
        "All Players: (1 active/4 capacity)",
        "\tAlice (active)",
        "\tBob (sitting)",
    ];
    assert_eq!(s.execute_line("list"), expected);
    assert_eq!(s.execute_line("player list"), expected);
}

#[test]
fn unsit_all_brings_everyone_back() {
    let mut s = session();
    run(
        &mut s,
        &["player add Alice", "player add Bob", "player sit Alice", "player sit Bob"],
    );
    assert_eq!(s.execute_line("player unsit ALL"), ["All players are in!"]);
    assert_eq!(s.roster().active_count(), 2);
}

#[test]
fn export_prints_roster_as_json() {
    let mut s = session();
    run(&mut s, &["capacity 1", "player add Alice", "play"]);
    let json = s.execute_line("export").join("\n");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["roster"]["capacity"], 1);
    assert_eq!(value["roster"]["players"][0]["name"], "Alice");
    assert_eq!(value["roster"]["players"][0]["games_played"], 1);
    assert_eq!(value["history"][0]["picks"][0]["name"], "Alice");
}

#[test]
fn stop_ends_the_session() {
    let mut s = session();
    assert_eq!(s.execute_line("ggs"), ["GGs"]);
    assert!(!s.is_running());
}

#[test]
fn run_survives_undecodable_input() {
    let mut s = session();
    let input: &[u8] = b"player add Alice\ncapacity 1\n\xff\xfe\nplay\nlist\nstop\n";
    let mut output = Vec::new();
    s.run(input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("is not a recognized command."));
    assert!(text.contains("\tAlice is playing! (1)"));
    assert!(text.contains("All Players: (1 active/1 capacity)"));
    assert!(text.ends_with("GGs\n"));
    assert!(!s.is_running());
    assert_eq!(s.roster().rounds_played(), 1);
}

#[test]
fn run_stops_at_end_of_input() {
    let mut s = session();
    let input: &[u8] = b"player add Alice";
    let mut output = Vec::new();
    s.run(input, &mut output).unwrap();

    assert!(s.roster().get_player("Alice").is_some());
    assert_eq!(String::from_utf8(output).unwrap(), ">>> Alice added!\n>>> \n");
}
