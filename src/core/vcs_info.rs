//! `.cargo_vcs_info.json` support.
//!
//! Cargo writes this file into every published package tarball; it is the
//! only version-control trace available when a crate is built from a
//! registry download instead of a checkout.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::revision::Revision;

pub const VCS_INFO_FILE: &str = ".cargo_vcs_info.json";

/// Abbreviation length matching git's default short-hash width.
const SHORT_SHA1_LEN: usize = 7;

#[derive(Debug, Clone, Deserialize)]
pub struct VcsInfo {
    pub git: GitInfo,
    #[serde(default)]
    pub path_in_vcs: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitInfo {
    pub sha1: String,
}

/// Read `.cargo_vcs_info.json` from a directory.
///
/// Returns `Ok(None)` when the file does not exist (a normal checkout).
/// A file that exists but cannot be parsed means a corrupt package and is
/// reported as an error.
pub fn load(dir: &Path) -> Result<Option<VcsInfo>> {
    let path = dir.join(VCS_INFO_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let info: VcsInfo = serde_json::from_str(&content)
        .map_err(|e| Error::Manifest(format!("malformed {}: {}", VCS_INFO_FILE, e)))?;
    Ok(Some(info))
}

impl VcsInfo {
    /// Abbreviated commit hash, mirroring git's default abbreviation.
    pub fn short_sha1(&self) -> &str {
        let end = self.git.sha1.len().min(SHORT_SHA1_LEN);
        &self.git.sha1[..end]
    }

    /// Convert into a [`Revision`].
    ///
    /// A packaged tarball is immutable, so the result is never dirty and
    /// carries no tag or timestamp.
    pub fn into_revision(self) -> Revision {
        Revision {
            id: self.short_sha1().to_string(),
            commit: self.git.sha1,
            tag: None,
            dirty: false,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn load_parses_cargo_schema() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(VCS_INFO_FILE),
            r#"{"git": {"sha1": "9d48bc12b40dd7e6d3b2d9b3930eff3c2a52d2ea"}, "path_in_vcs": "crates/foo"}"#,
        )
        .unwrap();

        let info = load(dir.path()).unwrap().unwrap();
        assert_eq!(info.git.sha1, "9d48bc12b40dd7e6d3b2d9b3930eff3c2a52d2ea");
        assert_eq!(info.path_in_vcs.as_deref(), Some("crates/foo"));
        assert_eq!(info.short_sha1(), "9d48bc1");
    }

    #[test]
    fn load_without_path_in_vcs_field() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(VCS_INFO_FILE),
            r#"{"git": {"sha1": "9d48bc12b40dd7e6d3b2d9b3930eff3c2a52d2ea"}}"#,
        )
        .unwrap();

        let info = load(dir.path()).unwrap().unwrap();
        assert!(info.path_in_vcs.is_none());
    }

    #[test]
    fn load_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(VCS_INFO_FILE), "{not json").unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn short_sha1_tolerates_truncated_hashes() {
        let info = VcsInfo {
            git: GitInfo {
                sha1: "9d48".to_string(),
            },
            path_in_vcs: None,
        };
        assert_eq!(info.short_sha1(), "9d48");
    }
}
