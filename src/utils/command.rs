//! Command execution primitives with consistent error handling.
//!
//! Every child process runs with stdin closed so a misbehaving command can
//! never block the caller on terminal input.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::{Error, Result};

/// Run a command and return stdout on success.
///
/// Returns trimmed stdout if the command succeeds.
/// Returns an error with stderr (or stdout fallback) if it fails.
pub fn run(program: &str, args: &[&str], context: &str) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", context, e)))?;

    if !output.status.success() {
        return Err(Error::CommandFailed(format!(
            "{} failed: {}",
            context,
            error_text(&output)
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a command in a specific directory.
///
/// Returns trimmed stdout if the command succeeds.
/// Returns an error with stderr (or stdout fallback) if it fails.
pub fn run_in(dir: &Path, program: &str, args: &[&str], context: &str) -> Result<String> {
    let output = run_raw_in(dir, program, args, context)?;
    Ok(String::from_utf8_lossy(&output).trim().to_string())
}

/// Run a command in a directory and return stdout as raw bytes.
///
/// For consumers that must stay byte-exact (paths are not guaranteed UTF-8).
/// Output is returned untrimmed.
pub fn run_raw_in(dir: &Path, program: &str, args: &[&str], context: &str) -> Result<Vec<u8>> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", context, e)))?;

    if !output.status.success() {
        return Err(Error::CommandFailed(format!(
            "{} failed: {}",
            context,
            error_text(&output)
        )));
    }

    Ok(output.stdout)
}

/// Run a command in a directory, returning None on failure instead of error.
///
/// Useful when command failure is expected/acceptable (e.g., checking for optional tags).
pub fn run_in_optional(dir: &Path, program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

/// Check if a command succeeds in a directory without capturing output.
pub fn succeeded_in(dir: &Path, program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Extract error text from command output.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
