//! Integration tests for the CLI binary.
//!
//! Verifies that the `toolprobe` binary exists and responds to basic
//! flags. Registered as a [[test]] in the toolprobe-cli crate so that
//! CARGO_BIN_EXE_toolprobe is available.

use std::process::Command;

/// Get a Command pointing to the `toolprobe` binary.
fn toolprobe_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_toolprobe"))
}

#[test]
fn cli_responds_to_help() {
    let output = toolprobe_binary()
        .arg("--help")
        .output()
        .expect("failed to execute toolprobe --help");

    assert!(
        output.status.success(),
        "toolprobe --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("toolprobe") || stdout.contains("Usage"),
        "toolprobe --help output should contain usage information, got: {stdout}"
    );
    assert!(
        stdout.contains("--endpoint"),
        "help should document the endpoint flag"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = toolprobe_binary()
        .arg("--version")
        .output()
        .expect("failed to execute toolprobe --version");

    assert!(
        output.status.success(),
        "toolprobe --version should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1") || stdout.contains("toolprobe"),
        "toolprobe --version should contain version info, got: {stdout}"
    );
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = toolprobe_binary()
        .arg("--nonexistent-flag")
        .output()
        .expect("failed to execute toolprobe");

    assert!(
        !output.status.success(),
        "unknown flags should produce a non-zero exit"
    );
}

#[test]
fn cli_fails_fast_without_key_file() {
    let dir = tempfile::tempdir().unwrap();

    // Authentication happens before any network activity, so a missing key
    // file must fail the run regardless of the endpoint being unreachable.
    let output = toolprobe_binary()
        .arg("--key-dir")
        .arg(dir.path())
        .arg("--key-file")
        .arg("absent.pem")
        .output()
        .expect("failed to execute toolprobe");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("authentication"),
        "fatal authentication failure should be reported, got: {stderr}"
    );
}
