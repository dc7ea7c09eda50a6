use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use revstamp::buildscript;

use super::GlobalArgs;

#[derive(Args)]
pub struct EmitArgs {
    /// Repository path (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Environment variable the rustc-env directive will set
    #[arg(long, value_name = "VAR", default_value = "REVSTAMP_REVISION")]
    pub env_var: String,
}

/// The one command whose stdout IS the cargo directive stream, so no JSON
/// envelope here.
pub fn run(args: EmitArgs, _global: &GlobalArgs) -> revstamp::Result<i32> {
    let dir = super::resolve_dir(args.path);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    buildscript::emit_revision(&dir, &args.env_var, &mut handle)?;
    handle.flush()?;

    Ok(0)
}
