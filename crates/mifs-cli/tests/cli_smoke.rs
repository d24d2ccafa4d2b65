//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `mifs` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

use mifs_selection::io::write_problem_json;
use mifs_selection::SelectionProblem;

fn cmd() -> Command {
    Command::cargo_bin("mifs").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mifs"));
}

// ---------------------------------------------------------------------------
// Demo subcommand
// ---------------------------------------------------------------------------

#[test]
fn demo_prints_both_selections() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("selected: [x1, x3, x4, x5]"))
        .stdout(predicate::str::contains("selected: [x1, x5, x3, x4]"));
}

#[test]
fn demo_verbose_logs_iterations() {
    cmd()
        .args(["demo", "--verbose"])
        .env_remove("MIFS_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("4: 0.75; [x1, x5, x3, x4]"))
        .stderr(predicate::str::contains("3: 0.65; [x1, x3, x5]"));
}

// ---------------------------------------------------------------------------
// Select subcommand
// ---------------------------------------------------------------------------

#[test]
fn select_no_problem_errors() {
    cmd().arg("select").assert().failure();
}

#[test]
fn select_nonexistent_problem_errors() {
    cmd()
        .args(["select", "/nonexistent/problem.json"])
        .assert()
        .failure();
}

#[test]
fn select_unknown_strategy_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problem.json");
    write_problem_json(&path, &SelectionProblem::demo()).unwrap();

    cmd()
        .args(["select", path.to_str().unwrap(), "--strategy", "floating"])
        .assert()
        .failure();
}

#[test]
fn select_backward_with_budget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problem.json");
    write_problem_json(&path, &SelectionProblem::demo()).unwrap();

    cmd()
        .args([
            "select",
            path.to_str().unwrap(),
            "--strategy",
            "backward",
            "--max-features",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("selected: [x1, x3, x5]"))
        .stdout(predicate::str::contains("score: 0.65"));
}

#[test]
fn select_writes_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let problem_path = dir.path().join("problem.json");
    let output_path = dir.path().join("selected.json");
    write_problem_json(&problem_path, &SelectionProblem::demo()).unwrap();

    cmd()
        .args([
            "select",
            problem_path.to_str().unwrap(),
            "-o",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written["strategy"], "forward");
    assert_eq!(written["features"], serde_json::json!([0, 4, 2, 3]));
    assert_eq!(written["score"], 0.75);
}

#[test]
fn select_incomplete_redundancy_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problem.json");
    let mut problem = SelectionProblem::demo();
    problem.redundancy.clear();
    write_problem_json(&path, &problem).unwrap();

    cmd()
        .args(["select", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing redundancy value"));
}

// ---------------------------------------------------------------------------
// Select-tsv subcommand
// ---------------------------------------------------------------------------

#[test]
fn select_tsv_requires_both_tables() {
    cmd()
        .args(["select-tsv", "--importance", "/nonexistent/importance.tsv"])
        .assert()
        .failure();
}

#[test]
fn select_tsv_runs_forward() {
    let dir = tempfile::tempdir().unwrap();
    let importance = dir.path().join("importance.tsv");
    let redundancy = dir.path().join("redundancy.tsv");
    std::fs::write(&importance, "feature\timportance\n0\t0.4\n1\t0.25\n2\t0.3\n").unwrap();
    std::fs::write(
        &redundancy,
        "first\tsecond\tredundancy\n0\t1\t0.3\n0\t2\t0.2\n1\t2\t0.2\n",
    )
    .unwrap();

    cmd()
        .args([
            "select-tsv",
            "-i",
            importance.to_str().unwrap(),
            "-r",
            redundancy.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("selected: [x1, x3]"))
        .stdout(predicate::str::contains("score: 0.5"));
}
