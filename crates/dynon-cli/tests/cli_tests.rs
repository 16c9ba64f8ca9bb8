//! Integration tests for the `dynon` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the fmt, get,
//! and hours subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, error handling, and roundtrip correctness.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the hours.json fixture (the weekly timesheet).
fn hours_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/hours.json")
}

/// Helper: path to the request.json fixture (an accounting request).
fn request_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/request.json")
}

/// Helper: path to the malformed.json fixture.
fn malformed_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/malformed.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Fmt subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmt_stdin_to_stdout_pretty() {
    // Test 1: pipe JSON via stdin, get pretty JSON on stdout
    let input = r#"{"name":"Alice","hours":[8.25,7.5]}"#;
    let expected = r#"{
  "name": "Alice",
  "hours": [
    8.25,
    7.5
  ]
}"#;

    Command::cargo_bin("dynon")
        .unwrap()
        .arg("fmt")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn fmt_compact_strips_whitespace() {
    // Test 2: --compact minifies the document
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["fmt", "--compact"])
        .write_stdin("{ \"a\" : [ 1 , 2 ] ,\n \"b\" : null }")
        .assert()
        .success()
        .stdout(predicate::str::diff(r#"{"a":[1,2],"b":null}"#));
}

#[test]
fn fmt_file_to_file() {
    // Test 3: read from file via -i, write to file via -o
    let output_path = "/tmp/dynon-test-fmt-output.json";

    // Clean up from any prior run
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("dynon")
        .unwrap()
        .args(["fmt", "-i", hours_json_path(), "-o", output_path])
        .assert()
        .success();

    // Verify the output file was created and holds the reformatted document
    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(
        content.starts_with("{\n  \"Week\": \"5/22/2024\""),
        "pretty output should open with the Week field"
    );
    assert!(content.contains("\"Alice\""), "output should keep Alice");

    // Clean up
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn fmt_preserves_document_semantics() {
    // Test 4: reformatting changes layout, never content
    let output = Command::cargo_bin("dynon")
        .unwrap()
        .args(["fmt", "-i", hours_json_path()])
        .output()
        .expect("fmt should succeed");
    assert!(output.status.success(), "fmt must succeed");
    let pretty = String::from_utf8(output.stdout).expect("output should be UTF-8");

    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(hours_json_path()).unwrap())
            .expect("fixture is valid JSON");
    let reformatted: serde_json::Value =
        serde_json::from_str(&pretty).expect("fmt output is valid JSON");
    assert_eq!(original, reformatted, "fmt should preserve JSON semantics");
}

#[test]
fn fmt_malformed_input_fails() {
    // Test 5: a malformed document produces a positioned parse error
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["fmt", "-i", malformed_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON input"))
        .stderr(predicate::str::contains("parse error at byte 5"));
}

#[test]
fn fmt_missing_file_fails() {
    // Test 6: an unreadable input file is reported with its path
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["fmt", "-i", "/tmp/dynon-test-no-such-file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"))
        .stderr(predicate::str::contains("dynon-test-no-such-file.json"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_scalar_by_case_insensitive_path() {
    // Test 7: dotted path lookup tolerates case differences per segment
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["get", "hours.alice.monday", "-i", hours_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::diff("8.2"));
}

#[test]
fn get_subtree_prints_pretty() {
    // Test 8: a map subtree renders pretty by default
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["get", "hours.Tom", "-i", hours_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\n  \"Monday\": 8.0\n}"));
}

#[test]
fn get_subtree_compact() {
    // Test 9: --compact applies to lookups too
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["get", "hours.Tom", "--compact", "-i", hours_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::diff(r#"{"Monday":8.0}"#));
}

#[test]
fn get_from_stdin() {
    // Test 10: stdin works for get just like fmt
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["get", "request"])
        .write_stdin(std::fs::read_to_string(request_json_path()).unwrap())
        .assert()
        .success()
        .stdout(predicate::str::diff(r#""hours""#));
}

#[test]
fn get_missing_path_fails() {
    // Test 11: a path with no value is an error exit, not empty output
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["get", "hours.zoe", "-i", hours_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No value at path: hours.zoe"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Hours subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hours_request_totals_the_week() {
    // Test 12: the full accounting exchange through fixture files
    Command::cargo_bin("dynon")
        .unwrap()
        .args([
            "hours",
            "--request",
            request_json_path(),
            "--hours-file",
            hours_json_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            r#"{"from":"receiving","to":"accounting","people":{"Alice":40.70,"Fred":41.20,"Mary":0.00,"Sam":43.30,"Tom":8.00}}"#,
        ));
}

#[test]
fn hours_info_request_via_stdin() {
    // Test 13: an "info" request for one employee, piped on stdin
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["hours", "--hours-file", hours_json_path()])
        .write_stdin(r#"{"to":"receiving","from":"accounting","request":"info","employee":"alice"}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff(
            r#"{"from":"receiving","to":"accounting","response":{"alice":40.70}}"#,
        ));
}

#[test]
fn hours_misaddressed_message_is_refused() {
    // Test 14: a message for another department gets the protocol refusal
    let refusal = r#"{"from":"receiving","response":"Invalid message request"}"#;

    Command::cargo_bin("dynon")
        .unwrap()
        .args(["hours", "--hours-file", hours_json_path()])
        .write_stdin(r#"{"to":"shipping","request":"hours","people":{}}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff(refusal));

    // A request that is not JSON at all gets the same refusal
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["hours", "--hours-file", hours_json_path()])
        .write_stdin("this is not valid json {{{")
        .assert()
        .success()
        .stdout(predicate::str::diff(refusal));
}

#[test]
fn hours_missing_timesheet_reports_corrupt_file() {
    // Test 15: an unreadable hours file is a protocol error reply, exit 0
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["hours", "--hours-file", "/tmp/dynon-test-no-such-hours.json"])
        .write_stdin(r#"{"to":"receiving","request":"hours","people":{"Tom":0}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hours file is corrupt"));
}

#[test]
fn hours_unknown_request_names_the_item() {
    // Test 16: anything but "hours" or "info" is refused by name
    Command::cargo_bin("dynon")
        .unwrap()
        .args(["hours", "--hours-file", hours_json_path()])
        .write_stdin(r#"{"to":"receiving","from":"hr","request":"vacation"}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff(
            r#"{"from":"receiving","to":"hr","response":"Requested item not known: vacation"}"#,
        ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Roundtrip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn pretty_then_compact_restores_the_input() {
    // Test 17: fmt | fmt --compact is the identity on compact documents
    let input = r#"{"week":"5/22/2024","totals":[16.3,41.2],"open":true}"#;

    let pretty_output = Command::cargo_bin("dynon")
        .unwrap()
        .arg("fmt")
        .write_stdin(input)
        .output()
        .expect("fmt should succeed");
    assert!(pretty_output.status.success(), "fmt must succeed");
    let pretty = String::from_utf8(pretty_output.stdout).expect("output should be UTF-8");

    let compact_output = Command::cargo_bin("dynon")
        .unwrap()
        .args(["fmt", "--compact"])
        .write_stdin(pretty)
        .output()
        .expect("fmt --compact should succeed");
    assert!(compact_output.status.success(), "fmt --compact must succeed");
    let compact = String::from_utf8(compact_output.stdout).expect("output should be UTF-8");

    assert_eq!(compact, input, "roundtrip should restore the compact form");
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge cases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    // Test 18: --help shows usage information
    Command::cargo_bin("dynon")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DYNON"))
        .stdout(predicate::str::contains("fmt"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("hours"));
}

#[test]
fn unknown_subcommand_fails() {
    // Test 19: unknown subcommand produces an error
    Command::cargo_bin("dynon")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}
