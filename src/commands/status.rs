use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use revstamp::{git, Error};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct StatusArgs {
    /// Repository path (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOutput {
    pub clean: bool,
    pub commit: String,
}

pub fn run(args: StatusArgs, _global: &GlobalArgs) -> CmdResult<StatusOutput> {
    let dir = super::resolve_dir(args.path);

    if !git::is_git_repo(&dir) {
        return Err(Error::Other(format!(
            "Not a git repository: {}",
            dir.display()
        )));
    }
    if !git::has_commits(&dir) {
        return Err(Error::Other(format!(
            "Repository has no commits: {}",
            dir.display()
        )));
    }

    let clean = !git::has_local_changes(&dir)?;
    let commit = git::head_commit(&dir)?;

    Ok((StatusOutput { clean, commit }, 0))
}
