//! Version extraction and tag/manifest correspondence.
//!
//! Release automation wants to know two things: what version a tag carries,
//! and whether that version agrees with the manifest of the crate being
//! released.

use std::fs;
use std::path::Path;

use regex::Regex;
use semver::Version;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::git;

/// Extract version number from a git tag.
/// Handles formats: v1.0.0, 1.0.0, component-v1.0.0
pub fn extract_version_from_tag(tag: &str) -> Option<String> {
    let version_pattern = Regex::new(r"v?(\d+\.\d+(?:\.\d+)?)").ok()?;
    version_pattern
        .captures(tag)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse version from content using regex pattern.
/// Pattern must contain a capture group for the version string.
pub fn parse_version(content: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Get default version pattern based on file extension.
pub fn default_pattern_for_file(filename: &str) -> &'static str {
    if filename.ends_with(".toml") {
        r#"version\s*=\s*"(\d+\.\d+\.\d+)""#
    } else if filename.ends_with(".json") {
        r#""version"\s*:\s*"(\d+\.\d+\.\d+)""#
    } else {
        r"(\d+\.\d+\.\d+)"
    }
}

/// Read the `version` field of the `Cargo.toml` in a directory.
pub fn manifest_version(dir: &Path) -> Result<String> {
    let path = dir.join("Cargo.toml");
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Manifest(format!("cannot read {}: {}", path.display(), e)))?;

    parse_version(&content, default_pattern_for_file("Cargo.toml")).ok_or_else(|| {
        Error::Manifest(format!("no version field found in {}", path.display()))
    })
}

/// Outcome of comparing the latest tag against the manifest version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "outcome")]
pub enum TagCheck {
    Match {
        version: String,
    },
    Mismatch {
        tag_version: String,
        manifest_version: String,
    },
    NoTags {
        manifest_version: String,
    },
}

/// Compare the latest reachable tag against the manifest version.
///
/// Both sides are compared as semver, so `v1.2.3` matches `1.2.3`. A
/// repository without tags is a valid state, not a failure.
pub fn check_tag_matches_manifest(dir: &Path) -> Result<TagCheck> {
    let manifest = manifest_version(dir)?;
    let manifest_semver = parse_semver(&manifest)?;

    let tag = match git::latest_tag(dir) {
        Some(tag) => tag,
        None => {
            return Ok(TagCheck::NoTags {
                manifest_version: manifest,
            })
        }
    };

    let tag_version = extract_version_from_tag(&tag)
        .ok_or_else(|| Error::InvalidRevision(format!("tag {} carries no version number", tag)))?;
    let tag_semver = parse_semver(&tag_version)?;

    if tag_semver == manifest_semver {
        Ok(TagCheck::Match { version: manifest })
    } else {
        Ok(TagCheck::Mismatch {
            tag_version,
            manifest_version: manifest,
        })
    }
}

fn parse_semver(version: &str) -> Result<Version> {
    Version::parse(version)
        .map_err(|e| Error::InvalidRevision(format!("not a semver version {:?}: {}", version, e)))
}
