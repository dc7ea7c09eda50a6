use std::path::PathBuf;

use clap::Args;

use revstamp::log_status;
use revstamp::version::{self, TagCheck};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct CheckArgs {
    /// Repository path (defaults to current directory)
    pub path: Option<PathBuf>,
}

pub fn run(args: CheckArgs, _global: &GlobalArgs) -> CmdResult<TagCheck> {
    let dir = super::resolve_dir(args.path);
    let outcome = version::check_tag_matches_manifest(&dir)?;

    let exit_code = match &outcome {
        TagCheck::Match { version } => {
            log_status!("check", "Tag matches manifest at {}", version);
            0
        }
        TagCheck::Mismatch {
            tag_version,
            manifest_version,
        } => {
            log_status!(
                "check",
                "Tag version {} does not match manifest version {}",
                tag_version,
                manifest_version
            );
            1
        }
        TagCheck::NoTags { manifest_version } => {
            log_status!("check", "No tags yet; manifest is at {}", manifest_version);
            0
        }
    };

    Ok((outcome, exit_code))
}
