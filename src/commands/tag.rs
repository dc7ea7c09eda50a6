use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use revstamp::{git, version, Error};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct TagArgs {
    /// Repository path (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

pub fn run(args: TagArgs, _global: &GlobalArgs) -> CmdResult<TagOutput> {
    let dir = super::resolve_dir(args.path);

    if !git::is_git_repo(&dir) {
        return Err(Error::Other(format!(
            "Not a git repository: {}",
            dir.display()
        )));
    }

    let tag = git::latest_tag(&dir);
    let version = tag
        .as_deref()
        .and_then(version::extract_version_from_tag);

    Ok((TagOutput { tag, version }, 0))
}
