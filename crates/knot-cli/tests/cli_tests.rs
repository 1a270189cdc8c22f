//! Integration tests for the knot CLI.
//!
//! These tests run the compiled binary end to end.

use rstest::{fixture, rstest};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn knot() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_knot"));
    command.env("NO_COLOR", "1").env_remove("KNOT_ASCII");
    command
}

fn run(args: &[&str]) -> Output {
    knot().args(args).output().expect("Failed to execute knot binary")
}

fn run_in_dir(dir: &Path, args: &[&str]) -> Output {
    knot()
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute knot binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Provides a fresh temporary directory for each test
#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

const CHAIN: [&str; 4] = ["-e", "A:B:5", "-e", "B:C:3"];

fn with_chain(rest: &[&'static str]) -> Vec<&'static str> {
    CHAIN.iter().chain(rest).copied().collect()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("knot"));
    assert!(text.contains("Usage:"));
    for command in ["summary", "adjacency", "matrix", "paths", "dfs", "dot"] {
        assert!(text.contains(command), "help lacks {command}");
    }
}

#[test]
fn test_cli_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("0.1.0"));
}

#[test]
fn test_cli_no_args() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Graph is empty\n");
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_summary_text() {
    let output = run(&with_chain(&["-n", "lonely", "summary"]));
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Vertices (4): lonely, A, B, C\nEdges (2):\n  A -> B (5)\n  B -> C (3)\n"
    );
}

#[test]
fn test_paths_json() {
    let value = json(&run(&with_chain(&["--json", "paths"])));
    assert_eq!(value["labels"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(
        value["rows"],
        serde_json::json!([[0, 5, 8], [null, 0, 3], [null, null, 0]])
    );
}

#[rstest]
#[case::unicode(None, "A ∞ 5 ∞")]
#[case::ascii(Some("1"), "A inf   5 inf")]
fn test_matrix_text(#[case] ascii: Option<&str>, #[case] first_row: &str) {
    let mut command = knot();
    if let Some(value) = ascii {
        command.env("KNOT_ASCII", value);
    }
    let output = command
        .args(with_chain(&["matrix"]))
        .output()
        .expect("Failed to execute knot binary");

    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().nth(1), Some(first_row));
}

#[test]
fn test_adjacency_json() {
    let value = json(&run(&with_chain(&["--json", "adjacency", "B"])));
    assert_eq!(value["vertex"], "B");
    assert_eq!(
        value["successors"],
        serde_json::json!([{"index": 2, "name": "C"}])
    );
}

#[test]
fn test_dfs_rename_json() {
    let value = json(&run(&[
        "-e", "A:B:1", "-e", "C:A:2", "-e", "A:C:3", "--json", "dfs", "--suffix", "2",
    ]));

    let order: Vec<&str> = value["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(
        value["edges"],
        serde_json::json!([
            {"start": "A2", "end": "B2", "length": 1},
            {"start": "C2", "end": "A2", "length": 2},
            {"start": "A2", "end": "C2", "length": 3},
        ])
    );
}

#[test]
fn test_names_keep_surrounding_whitespace() {
    let value = json(&run(&[
        "-n", " pad ", "-e", " A:B :7", "--remove-vertex", " pad ", "--json", "summary",
    ]));
    assert_eq!(value["vertices"], serde_json::json!([" A", "B "]));
    assert_eq!(
        value["edges"],
        serde_json::json!([{"start": " A", "end": "B ", "length": 7}])
    );
}

#[rstest]
fn test_dot_output_file(temp_dir: TempDir) {
    let output = run_in_dir(temp_dir.path(), &with_chain(&["dot", "--output", "g.dot"]));
    assert!(output.status.success());
    assert!(stdout(&output).contains("Wrote DOT description"));

    let written = std::fs::read_to_string(temp_dir.path().join("g.dot")).unwrap();
    assert!(written.starts_with("digraph knot {"));
    assert!(written.contains("\"B\" -> \"C\" [label=\"3\"];"));
}

#[rstest]
fn test_config_file_limits_names(temp_dir: TempDir) {
    let config = temp_dir.path().join("knot.yaml");
    std::fs::write(&config, "max-name-len: 3\n").unwrap();
    let config = config.to_string_lossy().into_owned();

    let ok = run(&["--config", &config, "-e", "abc:d:1"]);
    assert!(ok.status.success());

    let too_long = run(&["--config", &config, "-e", "abcd:d:1"]);
    assert!(!too_long.status.success());
    assert!(String::from_utf8_lossy(&too_long.stderr).contains("cannot exceed 3"));
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case::forbidden_char(&["-e", "a-b:c:1"], "forbidden character")]
#[case::duplicate_edge(&["-e", "A:B:1", "-e", "A:B:2"], "Already exists")]
#[case::missing_edge(&["-e", "A:B:1", "--remove-edge", "B:A"], "Not found")]
#[case::remove_from_empty(&["--remove-vertex", "A"], "Graph is empty")]
#[case::unknown_adjacency(&["-e", "A:B:1", "adjacency", "Z"], "not found")]
#[case::missing_config(&["--config", "/nonexistent/knot.yaml"], "Failed to access")]
fn test_errors_exit_non_zero(#[case] args: &[&str], #[case] needle: &str) {
    let output = run(args);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(needle), "{stderr:?} lacks {needle:?}");
}

#[test]
fn test_malformed_edge_is_a_usage_error() {
    let output = run(&["-e", "A:B"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("start:end:length"));
}
