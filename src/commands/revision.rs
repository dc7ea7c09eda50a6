use std::path::PathBuf;

use clap::Args;

use revstamp::revision::{self, Revision};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct RevisionArgs {
    /// Repository path (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Skip the .cargo_vcs_info.json fallback for packaged crates
    #[arg(long)]
    pub no_vcs_info: bool,
}

/// `data: null` on success means "no repository here", which is a normal
/// answer, not a failure.
pub fn run(args: RevisionArgs, _global: &GlobalArgs) -> CmdResult<Option<Revision>> {
    let dir = super::resolve_dir(args.path);

    let rev = if args.no_vcs_info {
        revision::discover(&dir)?
    } else {
        revision::discover_or_vcs_info(&dir)?
    };

    Ok((rev, 0))
}
