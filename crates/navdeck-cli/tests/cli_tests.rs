//! Integration tests for the `navdeck` CLI binary.
//!
//! Exercise the CLI as a subprocess, verifying exit codes and output. No
//! running server is required — commands that need one point at a closed
//! port and must fail cleanly.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::process::Command;

/// Helper: locate the `navdeck` binary built by `cargo test`.
fn navdeck_bin() -> String {
    let path = env!("CARGO_BIN_EXE_navdeck");
    assert!(
        Path::new(path).exists(),
        "navdeck binary not found at {path}"
    );
    path.to_owned()
}

/// Helper: run navdeck with args and return (`exit_code`, stdout, stderr).
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(navdeck_bin())
        .args(args)
        .env("NAVDECK_ADDR", "http://127.0.0.1:19420") // Nothing listens here.
        .env_remove("NAVDECK_TOKEN")
        .output()
        .expect("failed to execute navdeck");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ── Version & help ───────────────────────────────────────────────────

#[test]
fn version_flag_exits_zero() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0, "navdeck --version should exit 0");
    assert!(
        stdout.contains("navdeck"),
        "version output should contain 'navdeck': {stdout}"
    );
}

#[test]
fn help_lists_subcommands() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0, "navdeck --help should exit 0");
    for subcommand in ["list", "add", "update", "rm", "reorder", "groups"] {
        assert!(
            stdout.contains(subcommand),
            "help should mention '{subcommand}': {stdout}"
        );
    }
}

// ── Failure behavior ─────────────────────────────────────────────────

#[test]
fn list_against_unreachable_server_fails_cleanly() {
    let (code, _, stderr) = run(&["list"]);
    assert_ne!(code, 0, "list should fail when the server is unreachable");
    assert!(
        stderr.contains("error"),
        "failure should be reported on stderr: {stderr}"
    );
}

#[test]
fn mutating_command_without_token_fails_before_any_request() {
    let (code, _, stderr) = run(&["rm", "some-id"]);
    assert_ne!(code, 0);
    assert!(
        stderr.contains("token"),
        "missing token should be named in the error: {stderr}"
    );
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let (code, _, stderr) = run(&["frobnicate"]);
    assert_eq!(code, 2, "clap usage errors exit with 2");
    assert!(!stderr.is_empty());
}
