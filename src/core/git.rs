//! Read-only git plumbing.
//!
//! Every query shells out to `git` through [`crate::utils::command`]; nothing
//! here mutates the repository.

use std::borrow::Cow;
#[cfg(unix)]
use std::ffi::OsStr;
#[cfg(unix)]
use std::os::unix::ffi::OsStrExt as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};
use crate::utils::command;

const GIT: &str = "git";

/// Check whether a directory is inside a git work tree.
///
/// Also false when the `git` binary itself cannot be invoked, which lets
/// callers degrade gracefully on machines without git.
pub fn is_git_repo(dir: &Path) -> bool {
    command::succeeded_in(dir, GIT, &["rev-parse", "--git-dir"])
}

/// Check whether the repository has at least one commit.
///
/// False on an unborn branch (`git init` without a commit).
pub fn has_commits(dir: &Path) -> bool {
    command::succeeded_in(dir, GIT, &["rev-parse", "--verify", "HEAD"])
}

/// Resolve the repository's git directory, byte-exact.
///
/// Paths are not guaranteed UTF-8, so the raw bytes are converted through
/// `OsStr` on unix and lossily elsewhere. Git's trailing newline is stripped.
pub fn git_dir(dir: &Path) -> Result<PathBuf> {
    let raw = command::run_raw_in(dir, GIT, &["rev-parse", "--git-dir"], "git rev-parse")
        .map_err(|e| Error::GitCommandFailed(e.to_string()))?;

    let trimmed = match raw.last() {
        Some(b'\n') => &raw[..raw.len() - 1],
        _ => &raw[..],
    };

    if trimmed.is_empty() {
        return Err(Error::GitCommandFailed(
            "git rev-parse --git-dir returned empty output".to_string(),
        ));
    }

    Ok(bytes_to_path(trimmed).into_owned())
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> Cow<'_, Path> {
    Cow::Borrowed(AsRef::<Path>::as_ref(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> Cow<'_, Path> {
    Cow::Owned(PathBuf::from(String::from_utf8_lossy(bytes).into_owned()))
}

/// Get the full SHA-1 of `HEAD`.
pub fn head_commit(dir: &Path) -> Result<String> {
    let sha = command::run_in(dir, GIT, &["rev-parse", "HEAD"], "git rev-parse")
        .map_err(|e| Error::GitCommandFailed(e.to_string()))?;

    if sha.is_empty() {
        return Err(Error::InvalidRevision(
            "git rev-parse HEAD returned empty output".to_string(),
        ));
    }

    Ok(sha)
}

/// Get the abbreviated SHA-1 of `HEAD`.
pub fn short_head(dir: &Path) -> Result<String> {
    let sha = command::run_in(dir, GIT, &["rev-parse", "--short", "HEAD"], "git rev-parse")
        .map_err(|e| Error::GitCommandFailed(e.to_string()))?;

    if sha.is_empty() {
        return Err(Error::InvalidRevision(
            "git rev-parse --short HEAD returned empty output".to_string(),
        ));
    }

    Ok(sha)
}

/// Get the tag `HEAD` sits exactly on.
///
/// Returns None when HEAD is not tagged. Covers lightweight and annotated tags.
pub fn exact_tag(dir: &Path) -> Option<String> {
    command::run_in_optional(dir, GIT, &["describe", "--exact-match", "--tags", "HEAD"])
}

/// Get the latest tag reachable from `HEAD`.
///
/// Returns None if no tags exist.
pub fn latest_tag(dir: &Path) -> Option<String> {
    command::run_in_optional(dir, GIT, &["describe", "--tags", "--abbrev=0"])
}

/// Check whether tracked files carry uncommitted changes.
///
/// Untracked files never count: they do not change what a rebuild of the
/// tracked sources would contain.
pub fn has_local_changes(dir: &Path) -> Result<bool> {
    let stdout = command::run_in(
        dir,
        GIT,
        &["status", "--porcelain", "--untracked-files=no"],
        "git status",
    )
    .map_err(|e| Error::GitCommandFailed(e.to_string()))?;

    Ok(!stdout.is_empty())
}

/// Get the committer timestamp of `HEAD`.
pub fn commit_timestamp(dir: &Path) -> Result<DateTime<FixedOffset>> {
    let raw = command::run_in(dir, GIT, &["show", "-s", "--format=%cI", "HEAD"], "git show")
        .map_err(|e| Error::GitCommandFailed(e.to_string()))?;

    DateTime::parse_from_rfc3339(&raw).map_err(|e| {
        Error::InvalidRevision(format!("unparseable commit timestamp {:?}: {}", raw, e))
    })
}
