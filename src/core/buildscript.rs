//! Cargo build-script integration.
//!
//! Directives go to a caller-provided writer rather than straight to stdout:
//! inside a build script stdout has protocol meaning, and tests need to see
//! exactly what would be emitted.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::git;
use crate::revision::{self, Revision};

// Changing any of these inside the git dir means the revision may differ:
// a new commit, a staged file, or a moved/added tag.
static RERUN_PATHS: [&str; 3] = ["HEAD", "index", "refs/"];

/// Emit `cargo:rerun-if-changed` directives for the repository state.
///
/// Keys the build script's re-run decision to the commit, the index, and the
/// tag namespace.
pub fn emit_rerun_paths<W: Write>(dir: &Path, writer: &mut W) -> Result<()> {
    let git_dir = git::git_dir(dir)?;
    for path in RERUN_PATHS {
        writeln!(
            writer,
            "cargo:rerun-if-changed={}",
            git_dir.join(path).display()
        )?;
    }
    Ok(())
}

/// One-call entry point for a `build.rs`.
///
/// Emits rerun directives (when inside a repository), then either a
/// `cargo:rustc-env=<env_var>=<id>` line carrying the discovered revision or
/// a `cargo:warning` explaining why none is available. Returns the revision
/// so callers can derive further directives from it.
pub fn emit_revision<W: Write>(
    dir: &Path,
    env_var: &str,
    writer: &mut W,
) -> Result<Option<Revision>> {
    if git::is_git_repo(dir) {
        emit_rerun_paths(dir, writer)?;
    }

    match revision::discover_or_vcs_info(dir)? {
        Some(rev) => {
            writeln!(writer, "cargo:rustc-env={}={}", env_var, rev.id)?;
            Ok(Some(rev))
        }
        None => {
            writeln!(
                writer,
                "cargo:warning=No git repository or package metadata found; {} will not be set",
                env_var
            )?;
            Ok(None)
        }
    }
}
