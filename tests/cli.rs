//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const ANCHOR: &str = "2024-06-15T10:30:00Z";

fn tracker() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_object-tracker"));
    for key in ["TRACKER_COUNT", "TRACKER_SEED", "TRACKER_WINDOW_DAYS", "TRACKER_ANCHOR"] {
        cmd.env_remove(key);
    }
    cmd
}

fn run_tracker(args: &[&str]) -> Output {
    tracker().args(args).output().expect("failed to run object-tracker binary")
}

fn run_menu(args: &[&str], script: &str) -> Output {
    let mut child = tracker()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn object-tracker binary");
    child.stdin.take().unwrap().write_all(script.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn json_records(output: &Output) -> Vec<serde_json::Value> {
    serde_json::from_slice::<serde_json::Value>(&output.stdout)
        .expect("stdout is JSON")
        .as_array()
        .cloned()
        .unwrap()
}

#[test]
fn list_prints_requested_number_of_rows() {
    let output = run_tracker(&["list", "--count", "5"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("ID"));
    // header + rule + rows
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = ["list", "--seed", "42", "--anchor", ANCHOR, "--format", "json"];
    let first = run_tracker(&args);
    let second = run_tracker(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(json_records(&first).len(), 15);
}

#[test]
fn search_finds_generated_name_case_insensitively() {
    let base = ["--seed", "7", "--anchor", ANCHOR, "--format", "json"];
    let listed = json_records(&run_tracker(&[&["list"][..], &base[..]].concat()));
    let name = listed[0]["name"].as_str().unwrap().to_uppercase();
    let expected = listed
        .iter()
        .filter(|r| r["name"].as_str().unwrap().to_uppercase() == name)
        .count();

    let found = json_records(&run_tracker(&[&["search", name.as_str()][..], &base[..]].concat()));
    assert_eq!(found.len(), expected);
    assert_eq!(found[0]["id"], listed[0]["id"]);
}

#[test]
fn search_without_matches_succeeds() {
    let output = run_tracker(&["search", "Nobody Atall", "--count", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "No objects found.\n");
}

#[test]
fn sort_descending_orders_newest_first() {
    let output = run_tracker(&[
        "sort",
        "--descending",
        "--seed",
        "3",
        "--anchor",
        ANCHOR,
        "--format",
        "json",
    ]);
    assert!(output.status.success());
    let dates: Vec<String> = json_records(&output)
        .iter()
        .map(|r| r["timestamp"].as_str().unwrap().to_string())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn menu_runs_from_stdin() {
    let output = run_menu(&["--count", "4"], "2\n1\n1\nNobody Atall\n3\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.starts_with("Generated 4 random objects."));
    assert!(stdout.contains("Sorting objects by date in ascending order:"));
    assert!(stdout.contains("Search results for 'Nobody Atall':\nNo objects found."));
    assert!(stdout.ends_with("Exiting the program.\n"));
}

#[test]
fn count_from_environment() {
    let output =
        tracker().args(["list", "--format", "json"]).env("TRACKER_COUNT", "2").output().unwrap();
    assert!(output.status.success());
    assert_eq!(json_records(&output).len(), 2);
}

#[test]
fn oversized_window_fails_cleanly() {
    let output = tracker().arg("list").env("TRACKER_WINDOW_DAYS", "200000000").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("TRACKER_WINDOW_DAYS"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn invalid_environment_value_fails() {
    let output = tracker().arg("list").env("TRACKER_COUNT", "lots").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("TRACKER_COUNT"));
}

#[test]
fn help_lists_subcommands() {
    let output = run_tracker(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("search"));
    assert!(stdout.contains("sort"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_tracker(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
