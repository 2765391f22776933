//! End-to-end tests for the `gridpath` binary.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn solve_sample_maze() {
    let mut cmd = cargo_bin_cmd!("gridpath");
    cmd.arg("solve");
    cmd.assert()
        .success()
        .stdout(contains(
            "Path: [(0, 0), (1, 1), (2, 2), (3, 3), (4, 3), (5, 4), (4, 5), (5, 6), (6, 6), (7, 6)]",
        ))
        .stdout(contains("Closed List: [(0, (0, 0)), (1, (1, 1))"))
        .stdout(contains("Steps: 9, expanded: 10, still open: 20"))
        .stdout(contains("S"))
        .stdout(contains("G"));
}

#[test]
fn solve_text_maze_without_path_fails() {
    let dir = tempdir().expect("create temp dir");
    let maze = dir.path().join("wall.txt");
    fs::write(&maze, "..#..\n..#..\n..#..\n").expect("write maze");

    let mut cmd = cargo_bin_cmd!("gridpath");
    cmd.arg("solve").arg(&maze);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("no path from (0, 0) to (2, 4)"));
}

#[test]
fn solve_json_scenario_as_json() {
    let dir = tempdir().expect("create temp dir");
    let scenario = dir.path().join("scenario.json");
    fs::write(
        &scenario,
        r#"{"grid": [[0, 0, 0], [0, 1, 0], [0, 0, 0]], "start": [0, 0], "goal": [2, 2]}"#,
    )
    .expect("write scenario");

    let mut cmd = cargo_bin_cmd!("gridpath");
    cmd.arg("solve").arg(&scenario).args(["--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(v["steps"], 3);
    assert_eq!(v["path"][0], serde_json::json!([0, 0]));
    assert_eq!(v["path"][3], serde_json::json!([2, 2]));
}

#[test]
fn endpoints_and_heuristic_from_flags() {
    let mut cmd = cargo_bin_cmd!("gridpath");
    cmd.args([
        "solve",
        "--start",
        "9,0",
        "--goal",
        "0,9",
        "--heuristic",
        "chebyshev",
        "--no-map",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("Path: [(9, 0),"))
        .stdout(contains("(0, 9)]"));
}

#[test]
fn bad_arguments_are_rejected() {
    cargo_bin_cmd!("gridpath")
        .args(["solve", "--start", "nope"])
        .assert()
        .failure()
        .stderr(contains("expected ROW,COL"));
    cargo_bin_cmd!("gridpath")
        .args(["solve", "--heuristic", "euclid"])
        .assert()
        .failure()
        .stderr(contains("unknown heuristic"));
}

#[test]
fn generate_is_reproducible_and_solvable_format() {
    let run = || {
        cargo_bin_cmd!("gridpath")
            .args(["generate", "--rows", "6", "--cols", "8", "--seed", "42"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let a = run();
    assert_eq!(a, run());
    let text = String::from_utf8(a).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.len() == 8));
    assert!(lines[0].starts_with('.'));
    assert!(lines[5].ends_with('.'));
}
