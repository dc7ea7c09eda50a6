use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Git command failed: {0}")]
    GitCommandFailed(String),

    #[error("Invalid revision: {0}")]
    InvalidRevision(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::CommandFailed(_) => "COMMAND_FAILED",
            Error::GitCommandFailed(_) => "GIT_COMMAND_FAILED",
            Error::InvalidRevision(_) => "INVALID_REVISION",
            Error::Manifest(_) => "MANIFEST_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
            Error::Other(_) => "ERROR",
        }
    }
}
