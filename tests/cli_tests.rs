#![cfg(unix)]
//! End-to-end tests driving the compiled binary against a fake tool
//! placed on PATH.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_bitflips");

/// Install a fake `valgrind` into `dir`. The script must only use shell
/// builtins; the wrapper runs with PATH reduced to `dir`.
fn install_tool(dir: &Path, body: &str) -> Result<()> {
    let path = dir.join("valgrind");
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    let mut perms = fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms)?;
    Ok(())
}

fn run_wrapper(tool_dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(BIN)
        .args(args)
        .env("PATH", tool_dir)
        .output()?;
    Ok(output)
}

#[test]
fn test_usage_on_empty_invocation() -> Result<()> {
    let output = Command::new(BIN).output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Usage:"), "{stderr}");
    assert!(stderr.contains("--fault-probability=<float>"), "{stderr}");
    assert!(stderr.contains("--seed=<int> (default: 42)"), "{stderr}");
    Ok(())
}

#[test]
fn test_echoes_decimal_command_line() -> Result<()> {
    let dir = TempDir::new()?;
    install_tool(dir.path(), "exit 0")?;

    let output = run_wrapper(dir.path(), &["--fault-rate=0.25", "./prog"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(
        stdout.starts_with("valgrind --tool=bitflips --fault-rate=0.25 ./prog\n"),
        "{stdout}"
    );
    assert!(!stdout.contains("1048576000"), "{stdout}");
    Ok(())
}

#[test]
fn test_tool_receives_bit_patterns() -> Result<()> {
    let dir = TempDir::new()?;
    let argv_file = dir.path().join("argv.txt");
    install_tool(
        dir.path(),
        &format!("printf '%s\\n' \"$@\" > '{}'", argv_file.display()),
    )?;

    let output = run_wrapper(
        dir.path(),
        &["--fault-probability=0.25", "--seed=7", "./prog"],
    )?;
    assert!(output.status.success());

    let argv = fs::read_to_string(&argv_file)?;
    let lines: Vec<&str> = argv.lines().collect();
    assert_eq!(
        lines,
        [
            "--tool=bitflips",
            "--fault-probability=1048576000",
            "--seed=7",
            "./prog"
        ]
    );
    Ok(())
}

#[test]
fn test_rewrites_report_stream() -> Result<()> {
    let dir = TempDir::new()?;
    install_tool(
        dir.path(),
        "echo '==77== fault-rate: 3e800000' >&2\n\
         echo '==77== BF: fadd 11 3 3fc00000 0 1 0 40000000 x' >&2\n\
         echo '==77== Fault Rate: 3e800000' >&2",
    )?;

    let output = run_wrapper(dir.path(), &["--fault-rate=0.25", "./prog"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("==77== fault-rate: 0.25\n"), "{stdout}");
    assert!(
        stdout.contains("==77== BF: fadd 11 3 1.5 0 1 0 2.0 x\n"),
        "{stdout}"
    );
    // the summary line is not a parameter echo and stays hex
    assert!(stdout.contains("==77== Fault Rate: 3e800000\n"), "{stdout}");
    Ok(())
}

#[test]
fn test_propagates_tool_exit_code() -> Result<()> {
    let dir = TempDir::new()?;
    install_tool(dir.path(), "exit 9")?;

    let output = run_wrapper(dir.path(), &["./prog"])?;
    assert_eq!(output.status.code(), Some(9));
    Ok(())
}

#[test]
fn test_malformed_flag_aborts_before_launch() -> Result<()> {
    let dir = TempDir::new()?;
    let marker = dir.path().join("launched");
    install_tool(dir.path(), &format!(": > '{}'", marker.display()))?;

    let output = run_wrapper(dir.path(), &["--fault-rate=fast", "./prog"])?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("--fault-rate=fast"), "{stderr}");
    assert!(!marker.exists());
    Ok(())
}

#[test]
fn test_missing_tool_exits_127() -> Result<()> {
    let dir = TempDir::new()?;

    let output = run_wrapper(dir.path(), &["./prog"])?;
    assert_eq!(output.status.code(), Some(127));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(stderr.contains("valgrind"), "{stderr}");
    Ok(())
}
