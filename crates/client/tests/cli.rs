//! Runs the `loadout` binary against a temporary history and log directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const ABC_MID: &str = "eyJ2IjoxLCJnIjoibG9sIiwicyI6ImFiYyIsImMiOiJhaHJpIiwiciI6Ik1JRCIsImNoIjowfQ";

fn loadout(home: &Path, args: &[&str]) -> Output {
    let config = home.join("loadout.toml");
    if !config.exists() {
        std::fs::write(&config, "").unwrap();
    }

    Command::new(env!("CARGO_BIN_EXE_loadout"))
        .args(args)
        .env("LOADOUT_CONFIG", &config)
        .env("LOADOUT_HISTORY_PATH", home.join("history.json"))
        .env("LOADOUT_LOG_DIR", home.join("logs"))
        .env_remove("LOADOUT_DATA_DIR")
        .env_remove("LOADOUT_DEFAULT_GAME")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn generate_prints_share_line_and_code() {
    let home = TempDir::new().unwrap();
    let out = stdout(&loadout(
        home.path(),
        &["generate", "--champion", "ahri", "--role", "mid", "--seed", "abc"],
    ));

    assert!(out.contains("Ahri — MID"), "{out}");
    assert!(!out.contains("(Chaos)"));
    assert!(out.contains("Doran's Shield"));
    assert!(out.contains(&format!("Code: {ABC_MID}")));
    assert!(!home.path().join("history.json").exists());
}

#[test]
fn replay_saves_to_history() {
    let home = TempDir::new().unwrap();
    let out = stdout(&loadout(home.path(), &["replay", ABC_MID]));
    assert!(out.contains("Seed: abc"));

    let list = stdout(&loadout(home.path(), &["history", "list"]));
    assert!(list.contains(ABC_MID));
    assert!(list.contains("☆"));

    stdout(&loadout(home.path(), &["history", "favorite", ABC_MID]));
    let favorites = stdout(&loadout(home.path(), &["history", "list", "--favorites"]));
    assert!(favorites.contains("★"));

    stdout(&loadout(home.path(), &["history", "clear"]));
    let list = stdout(&loadout(home.path(), &["history", "list"]));
    assert!(list.contains("No saved builds"));
}

#[test]
fn json_output_matches_replay() {
    let home = TempDir::new().unwrap();
    let out = stdout(&loadout(
        home.path(),
        &["replay", ABC_MID, "--no-save", "--format", "json"],
    ));

    let build: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(build["identifier"], ABC_MID);
    assert_eq!(build["items"][0]["id"], "dorans_shield");
    assert!(!home.path().join("history.json").exists());
}

#[test]
fn bad_inputs_fail_cleanly() {
    let home = TempDir::new().unwrap();

    let out = loadout(home.path(), &["replay", "not-a-code"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid or unsupported build code"));

    let out = loadout(
        home.path(),
        &["generate", "--champion", "teemo", "--role", "top"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("teemo"));

    let out = loadout(home.path(), &["generate", "--champion", "ahri", "--role", "bottom"]);
    assert!(!out.status.success());
}

#[test]
fn preview_and_catalog() {
    let home = TempDir::new().unwrap();

    let out = stdout(&loadout(home.path(), &["preview", ABC_MID]));
    assert!(out.contains("Champion: ahri"));
    assert!(out.contains("Role: MID"));

    let out = stdout(&loadout(home.path(), &["catalog"]));
    assert!(out.contains("leesin"));
    assert!(out.contains("JUNGLE_STARTER"));
}

#[test]
fn unknown_game_lists_available_catalogs() {
    let home = TempDir::new().unwrap();
    let out = loadout(home.path(), &["catalog", "--game", "dota"]);
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown game 'dota'"), "{stderr}");
    assert!(stderr.contains("lol (5 champions)"), "{stderr}");
}
