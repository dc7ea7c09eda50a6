use std::fs;
use std::path::Path;
use std::process::Command;

use revstamp::buildscript;
use revstamp::revision;
use revstamp::vcs_info;
use revstamp::version::{self, TagCheck};

fn run_git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn make_release_repo(manifest_version: &str, tag: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    run_git(dir.path(), &["init"]);
    run_git(dir.path(), &["config", "user.name", "test-user"]);
    run_git(dir.path(), &["config", "user.email", "test@example.com"]);
    fs::write(
        dir.path().join("Cargo.toml"),
        format!(
            "[package]\nname = \"demo\"\nversion = \"{}\"\n",
            manifest_version
        ),
    )
    .unwrap();
    fs::write(dir.path().join("lib.rs"), "pub fn demo() {}\n").unwrap();
    run_git(dir.path(), &["add", "."]);
    run_git(dir.path(), &["commit", "-m", "release commit"]);
    run_git(dir.path(), &["tag", tag]);
    dir
}

#[test]
fn release_checkout_resolves_to_tag() {
    let repo = make_release_repo("1.4.0", "v1.4.0");

    let rev = revision::discover(repo.path()).unwrap().unwrap();
    assert_eq!(rev.id, "v1.4.0");
    assert_eq!(rev.tag.as_deref(), Some("v1.4.0"));
    assert!(!rev.dirty);
    assert_eq!(rev.commit.len(), 40);
}

#[test]
fn edited_release_checkout_gains_dirty_marker() {
    let repo = make_release_repo("1.4.0", "v1.4.0");

    fs::write(repo.path().join("lib.rs"), "pub fn demo() { /* edit */ }\n").unwrap();

    let rev = revision::discover(repo.path()).unwrap().unwrap();
    assert_eq!(rev.id, "v1.4.0+");
    assert!(rev.dirty);
}

#[test]
fn development_head_resolves_to_short_hash() {
    let repo = make_release_repo("1.4.0", "v1.4.0");
    run_git(repo.path(), &["commit", "--allow-empty", "-m", "post-release work"]);

    let rev = revision::discover(repo.path()).unwrap().unwrap();
    assert!(rev.tag.is_none());
    assert!(rev.commit.starts_with(&rev.id));
}

#[test]
fn revision_serializes_with_camel_case_keys() {
    let repo = make_release_repo("1.4.0", "v1.4.0");

    let rev = revision::discover(repo.path()).unwrap().unwrap();
    let json = serde_json::to_string(&rev).unwrap();
    assert!(json.contains("\"id\":\"v1.4.0\""));
    assert!(json.contains("\"dirty\":false"));
    assert!(json.contains("\"commit\":"));
    assert!(json.contains("\"timestamp\":"));
}

#[test]
fn build_script_flow_emits_env_and_rerun_directives() {
    let repo = make_release_repo("1.4.0", "v1.4.0");

    let mut buf = Vec::new();
    let rev = buildscript::emit_revision(repo.path(), "DEMO_REVISION", &mut buf)
        .unwrap()
        .unwrap();
    assert_eq!(rev.id, "v1.4.0");

    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("cargo:rustc-env=DEMO_REVISION=v1.4.0"));
    assert!(out.contains("cargo:rerun-if-changed="));
    assert!(out.contains("HEAD"));
    assert!(!out.contains("cargo:warning="));
}

#[test]
fn packaged_tarball_flow_uses_vcs_info() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(vcs_info::VCS_INFO_FILE),
        r#"{"git": {"sha1": "39643c1db70b54a24a4b2bce79a25c9a00f8f0e5"}, "path_in_vcs": ""}"#,
    )
    .unwrap();

    let mut buf = Vec::new();
    let rev = buildscript::emit_revision(dir.path(), "DEMO_REVISION", &mut buf)
        .unwrap()
        .unwrap();
    assert_eq!(rev.id, "39643c1");
    assert!(!rev.dirty);

    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("cargo:rustc-env=DEMO_REVISION=39643c1"));
    // No repository, so nothing to key reruns on.
    assert!(!out.contains("cargo:rerun-if-changed="));
}

#[test]
fn plain_directory_flow_warns_and_builds_on() {
    let dir = tempfile::tempdir().unwrap();

    let mut buf = Vec::new();
    let rev = buildscript::emit_revision(dir.path(), "DEMO_REVISION", &mut buf).unwrap();
    assert!(rev.is_none());

    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("cargo:warning="));
    assert!(!out.contains("cargo:rustc-env="));
}

#[test]
fn release_tag_and_manifest_agree() {
    let repo = make_release_repo("1.4.0", "v1.4.0");
    assert_eq!(
        version::check_tag_matches_manifest(repo.path()).unwrap(),
        TagCheck::Match {
            version: "1.4.0".to_string()
        }
    );
}

#[test]
fn stale_manifest_is_reported_as_mismatch() {
    let repo = make_release_repo("1.4.0", "v1.5.0");
    assert_eq!(
        version::check_tag_matches_manifest(repo.path()).unwrap(),
        TagCheck::Mismatch {
            tag_version: "1.5.0".to_string(),
            manifest_version: "1.4.0".to_string()
        }
    );
}
