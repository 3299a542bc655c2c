//! End-to-end runs of the `quadsift` binary.

use std::process::{Command, Output};

use crate::common::DIGITS_TO_30;

/// Run the quadsift binary with the given arguments, colors and
/// `RUST_LOG` disabled so output is stable.
fn run_quadsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quadsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run quadsift")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// QUADS
// ============================================================================

#[test]
fn test_strict_rejects_inverted_bounds() {
    let output = run_quadsift(&["quads", "--low", "9", "--high", "0", "--strict"]);
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("❌"), "missing error marker: {}", stderr);
    assert!(stderr.contains("invalid range"), "missing cause: {}", stderr);
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_inverted_bounds_print_nothing() {
    let output = run_quadsift(&["quads", "--low", "9", "--high", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_count_of_digit_quadruples() {
    let output = run_quadsift(&["quads", "--count"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "9");
}

#[test]
fn test_json_lists_quadruples_in_order() {
    let output = run_quadsift(&["quads", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.trim().starts_with("[[3,9,9,9],"), "got: {}", stdout);
    assert!(stdout.trim().ends_with("[7,7,8,8]]"), "got: {}", stdout);

    let parsed: Vec<[i64; 4]> = serde_json::from_str(stdout.trim()).expect("invalid JSON");
    assert_eq!(parsed, DIGITS_TO_30.to_vec());
}

#[test]
fn test_pruned_output_matches_plain() {
    let plain = run_quadsift(&["quads", "--target", "20"]);
    let pruned = run_quadsift(&["quads", "--target", "20", "--pruned"]);

    assert!(plain.status.success() && pruned.status.success());
    assert!(!plain.stdout.is_empty());
    assert_eq!(plain.stdout, pruned.stdout);
}

#[test]
fn test_plain_lines_are_space_separated() {
    let output = run_quadsift(&["quads"]);
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "3 9 9 9");
    assert_eq!(lines[8], "7 7 8 8");
}

// ============================================================================
// COMPACT
// ============================================================================

#[test]
fn test_compact_json_report() {
    let output = run_quadsift(&["compact", "22 45", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("\"removed\":1"), "got: {}", stdout);

    let report: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid JSON");
    assert_eq!(report["output"], serde_json::json!(b"2245".to_vec()));
    assert_eq!(report["skip"], serde_json::json!(b' '));
}

#[test]
fn test_compact_custom_skip_byte() {
    let output = run_quadsift(&["compact", "a-b-c", "--skip", "-", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let report: serde_json::Value =
        serde_json::from_str(stdout_of(&output).trim()).expect("invalid JSON");
    assert_eq!(report["output"], serde_json::json!(b"abc".to_vec()));
    assert_eq!(report["removed"], serde_json::json!(2));
}

#[test]
fn test_long_compaction_box_keeps_its_border() {
    let output = run_quadsift(&["compact", "a b c d e f g h i j k l m n o p"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    let widths: Vec<usize> = stdout.lines().map(|l| l.chars().count()).collect();
    assert!(
        widths.windows(2).all(|w| w[0] == w[1]),
        "ragged box: {:?}\n{}",
        widths,
        stdout
    );
    assert!(stdout.contains("(len 31)"));
    assert!(stdout.contains("(len 16)"));
}

// ============================================================================
// DEMO
// ============================================================================

#[test]
fn test_demo_prints_report_then_quadruples() {
    let output = run_quadsift(&[]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("['2', '2', ' ', '4', '5'] (len 5)"), "got: {}", stdout);
    assert!(stdout.contains("['2', '2', '4', '5'] (len 4)"), "got: {}", stdout);
    assert!(stdout.contains("capacity"));

    let compact_at = stdout.find("COMPACTION").expect("missing compaction section");
    let quads_at = stdout.find("QUADRUPLES").expect("missing quadruple section");
    assert!(compact_at < quads_at, "report must come first: {}", stdout);
    for q in DIGITS_TO_30 {
        let line = format!("{} {} {} {}", q[0], q[1], q[2], q[3]);
        assert!(stdout[quads_at..].contains(&line), "missing {}: {}", line, stdout);
    }
    assert!(stdout.contains("9 match(es)"));
}
