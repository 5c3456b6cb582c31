#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn colorcode(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_colorcode"))
        .args(args)
        .env_remove("COLORCODE_FALLBACK")
        .output()
        .unwrap()
}

#[test]
fn test_no_codes_logs_error_and_succeeds() {
    let output = colorcode(&["-L", "info"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Please provide one or more color codes"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_known_codes_print_to_stdout() {
    let output = colorcode(&["red", "green", "-L", "info"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "red #f00\ngreen #0f0\n");
}

#[test]
fn test_unknown_code_without_fallback_fails() {
    let output = colorcode(&["red", "purple", "-L", "info"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidColorCode"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_logs_go_to_stderr() {
    let output = colorcode(&["purple", "-f", "#123", "-L", "debug"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "purple #123\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using fallback color"), "unexpected stderr: {}", stderr);
}
