//! Integration tests for `cyclecheck check`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `cyclecheck` binary.
fn cyclecheck_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is …/deps/cmd_check-<hash>; the binary lives one level up.
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("cyclecheck");
    path
}

fn document(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write");
    f
}

fn check(args: &[&str]) -> std::process::Output {
    Command::new(cyclecheck_bin())
        .args(args)
        .env_remove("CYCLECHECK_LOG")
        .output()
        .expect("run cyclecheck check")
}

// ---------------------------------------------------------------------------
// check: single cycle (exit 0)
// ---------------------------------------------------------------------------

#[test]
fn cycle_exits_0_and_prints_true() {
    let f = document(r#"{"from":[3,1,2],"to":[2,3,1]}"#);
    let out = check(&["check", f.path().to_str().expect("path")]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "true\n");
}

#[test]
fn pairs_document_is_accepted() {
    let f = document(r#"{"edges":[[1,1]]}"#);
    let out = check(&["check", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn json_format_emits_one_object() {
    let f = document(r#"{"A":[1,2],"B":[2,1]}"#);
    let out = check(&["check", "--format", "json", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["is_cycle"], true);
    assert_eq!(value["edges"], 2);
}

#[test]
fn stdin_is_read_with_dash() {
    let mut child = Command::new(cyclecheck_bin())
        .args(["check", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cyclecheck");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(br#"{"from":[1,2],"to":[2,1]}"#)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "true\n");
}

#[test]
fn verbose_reports_timing_on_stderr() {
    let f = document(r#"{"from":[1,2],"to":[2,1]}"#);
    let out = check(&["check", "-v", f.path().to_str().expect("path")]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("checked 2 edges"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// check: not a single cycle (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn disjoint_cycles_exit_1_and_print_false() {
    let f = document(r#"{"from":[1,2,3,4],"to":[2,1,4,3]}"#);
    let out = check(&["check", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "false\n");
    assert!(
        out.stderr.is_empty(),
        "a negative verdict is not an error message; stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn quiet_prints_nothing_but_keeps_exit_code() {
    let f = document(r#"{"from":[1,2],"to":[2,3]}"#);
    let out = check(&["check", "-q", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

// ---------------------------------------------------------------------------
// check: input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn invalid_json_exits_2() {
    let f = document("not-valid-json");
    let out = check(&["check", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line"), "stderr: {stderr}");
}

#[test]
fn mismatched_lengths_exit_2() {
    let f = document(r#"{"from":[1,2],"to":[2]}"#);
    let out = check(&["check", f.path().to_str().expect("path")]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn nonexistent_file_exits_2() {
    let out = check(&["check", "/no/such/dir/edges.json"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn oversized_file_exits_2() {
    let f = document(r#"{"from":[1,2],"to":[2,1]}"#);
    let out = check(&[
        "check",
        "--max-file-size",
        "4",
        f.path().to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}
