//! Revision discovery: the identifier a build embeds to say what it was
//! built from.
//!
//! The identifier is the tag name when `HEAD` sits exactly on a tag,
//! otherwise the abbreviated commit hash, with a trailing `+` when tracked
//! files carry uncommitted changes.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::Result;
use crate::git;
use crate::vcs_info;

/// Captured revision state of a repository.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    /// Display identifier: tag or short hash, `+`-suffixed when dirty.
    pub id: String,
    /// Full SHA-1 of `HEAD`.
    pub commit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub dirty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Discover the revision of the repository containing `dir`.
///
/// Best-effort by contract: a missing `git` binary, a directory outside any
/// work tree, or a repository without commits all yield `Ok(None)` so that
/// builds from release tarballs and fresh checkouts still succeed. Once the
/// directory is known to be a live repository with history, git failures are
/// genuine errors.
pub fn discover(dir: &Path) -> Result<Option<Revision>> {
    if !git::is_git_repo(dir) {
        return Ok(None);
    }
    if !git::has_commits(dir) {
        return Ok(None);
    }

    let commit = git::head_commit(dir)?;
    let tag = git::exact_tag(dir);
    let dirty = git::has_local_changes(dir)?;
    let timestamp = git::commit_timestamp(dir)?;

    let base = match &tag {
        Some(tag) => tag.clone(),
        None => git::short_head(dir)?,
    };
    let id = if dirty { format!("{base}+") } else { base };

    Ok(Some(Revision {
        id,
        commit,
        tag,
        dirty,
        timestamp: Some(timestamp),
    }))
}

/// Discover the revision, falling back to packaged-crate metadata.
///
/// Registry tarballs ship `.cargo_vcs_info.json` instead of a `.git`
/// directory; when git discovery finds nothing, that file supplies the
/// commit hash.
pub fn discover_or_vcs_info(dir: &Path) -> Result<Option<Revision>> {
    if let Some(rev) = discover(dir)? {
        return Ok(Some(rev));
    }

    match vcs_info::load(dir)? {
        Some(info) => Ok(Some(info.into_revision())),
        None => Ok(None),
    }
}
