//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use revstamp::{Error, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Json)
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::Io(e));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (Err(Error::Json(err)), 1),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(&err);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(err: &Error) -> i32 {
    match err {
        Error::InvalidRevision(_) | Error::Manifest(_) => 2,
        Error::CommandFailed(_) | Error::GitCommandFailed(_) => 20,
        Error::Io(_) | Error::Json(_) | Error::Other(_) => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) {
    let printed = match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    };

    // Printing can only fail on a broken stdout; report on stderr and move on.
    if let Err(err) = printed {
        eprintln!("{}", err);
    }
}
