use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_army-clash")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("army-clash-{name}-{stamp}.toml"))
}

#[test]
fn text_run_prints_transcript_and_one_victory() {
    let output = Command::new(bin())
        .args(["--fast", "--seed", "7", "--soldiers", "5"])
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Battle Manager: Army 1 is attacking Army 2!")
        || stdout.contains("Battle Manager: Army 2 is attacking Army 1!"));
    assert!(stdout.contains("Army 1 have: "));
    assert_eq!(stdout.matches("Won the Battle!!!").count(), 1);

    let last = stdout.lines().rev().find(|l| !l.is_empty()).unwrap();
    assert!(last.starts_with("Battle Manager: Army "));
    assert!(last.ends_with(" Won the Battle!!!"));
}

#[test]
fn same_seed_same_transcript() {
    let run = || {
        Command::new(bin())
            .args(["--fast", "--seed", "123", "--soldiers", "10"])
            .output()
            .expect("battle should run")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn json_format_emits_report() {
    let output = Command::new(bin())
        .args(["--fast", "--seed", "11", "--soldiers", "6", "--format", "json"])
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("json format should emit json");
    assert_eq!(payload["seed"], 11);
    assert!(payload["winner"].is_string());
    assert_eq!(payload["armies"].as_array().map(Vec::len), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Won the Battle!!!"));
}

#[test]
fn round_cap_ends_undecided() {
    let output = Command::new(bin())
        .args(["--fast", "--seed", "3", "--max-rounds", "1", "--format", "json"])
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json format should emit json");
    assert_eq!(payload["rounds"], 1);
    assert_eq!(payload["outcome"], "Undecided");
    assert!(payload["winner"].is_null());
}

#[test]
fn config_file_sets_names() {
    let path = unique_temp_path("config");
    fs::write(
        &path,
        concat!(
            "army_names = [\"Red\", \"Blue\"]\n",
            "observer_name = \"Herald\"\n",
            "soldiers_per_army = 4\n",
            "round_delay_ms = 0\n",
        ),
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["--config", path.to_string_lossy().as_ref(), "--seed", "1"])
        .output()
        .expect("battle should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Red have: "));
    assert!(stdout.contains("Blue have: "));
    assert!(stdout.contains("Herald: "));

    let _ = fs::remove_file(path);
}

#[test]
fn invalid_soldier_count_fails() {
    let output = Command::new(bin())
        .args(["--fast", "--soldiers", "0"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("soldiers_per_army"));
}

#[test]
fn unknown_format_is_rejected() {
    let output = Command::new(bin())
        .args(["--format", "xml"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
}
