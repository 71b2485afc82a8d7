//! CLI Tests
//!
//! Runs the `stconv` binary and checks exit codes and reported messages.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Helper to run the binary with a clean logging environment
fn stconv(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run stconv")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// === Usage Errors ===

#[test]
fn test_no_arguments_exits_with_usage() {
    let output = stconv(&[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"), "stderr: {}", stderr(&output));
}

#[test]
fn test_missing_single_input_exits_nonzero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Alien");

    let output = stconv(&[&input]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Input not found"), "stderr: {}", err);
    assert!(err.contains("Usage"), "stderr: {}", err);
}

#[test]
fn test_missing_batch_directory_exits_nonzero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ST-XX");
    let out_dir = dir.path().join("converted");

    let output = stconv(&[Path::new("--batch"), &input, &out_dir]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Input not found"));
    assert!(!out_dir.exists());
}

// === Per-file Errors ===

#[test]
fn test_single_write_failure_exits_zero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Alien");
    let out = dir.path().join("missing_dir").join("Alien.wav");
    fs::write(&input, [0x01, 0x02]).unwrap();

    let output = stconv(&[&input, &out]);

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("Error converting"), "stderr: {}", err);
    assert!(err.contains("Failed to write"), "stderr: {}", err);
    assert!(!out.exists());
}

#[test]
fn test_batch_with_failed_file_exits_zero() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(input.path().join("Alien"), [0x01]).unwrap();
    fs::write(input.path().join("Bass"), [0x02]).unwrap();
    fs::create_dir(out.path().join("Alien.wav")).unwrap();

    let output = stconv(&[Path::new("--batch"), input.path(), out.path()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Error converting"));
    let report = stdout(&output);
    assert!(report.contains("Total: 1 files converted, 1 files skipped"), "stdout: {}", report);
    assert!(report.contains("1 files failed"), "stdout: {}", report);
    assert!(out.path().join("Bass.wav").is_file());
}

// === Successful Runs ===

#[test]
fn test_single_default_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Alien");
    fs::write(&input, [0x00, 0x7F, 0x80]).unwrap();

    let output = stconv(&[&input]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("Alien.wav").is_file());
    assert!(stdout(&output).contains("Frames: 3 @ 8000 Hz"));
}

#[test]
fn test_single_tagged_input_exits_zero_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Tagged");
    fs::write(&input, b"FORM\x00\x00\x00\x108SVXVHDR").unwrap();

    let output = stconv(&[&input]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("already has 8SVX header"));
    assert!(!dir.path().join("Tagged.wav").exists());
}

#[test]
fn test_batch_json_report() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(input.path().join("Alien"), [0x10, 0x20]).unwrap();

    let output = stconv(&[Path::new("--batch"), Path::new("--json"), input.path(), out.path()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["converted"], 1);
    assert_eq!(report["skipped"], 0);
}
