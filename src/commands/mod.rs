use std::path::PathBuf;

pub mod check;
pub mod emit;
pub mod revision;
pub mod status;
pub mod tag;

pub type CmdResult<T> = revstamp::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Resolve the optional positional repository path, defaulting to the
/// current directory.
pub(crate) fn resolve_dir(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("."))
}
