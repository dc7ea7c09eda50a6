use clap::Parser;

mod commands;
mod output;

use commands::{check, emit, revision, status, tag, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "revstamp")]
#[command(version = VERSION)]
#[command(about = "Git revision discovery for build scripts and release automation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve the repository revision identifier
    Revision(revision::RevisionArgs),
    /// Report working tree state
    Status(status::StatusArgs),
    /// Show the latest tag and the version it carries
    Tag(tag::TagArgs),
    /// Check that the latest tag matches the manifest version
    Check(check::CheckArgs),
    /// Print cargo build-script directives
    Emit(emit::EmitArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    // `emit` speaks the cargo directive protocol on stdout; every other
    // command wraps its result in the JSON envelope.
    let (json_result, exit_code) = match cli.command {
        Commands::Emit(args) => match emit::run(args, &global) {
            Ok(code) => return std::process::ExitCode::from(exit_code_to_u8(code)),
            Err(err) => {
                let code = output::exit_code_for_error(&err);
                (Err(err), code)
            }
        },
        Commands::Revision(args) => output::map_cmd_result_to_json(revision::run(args, &global)),
        Commands::Status(args) => output::map_cmd_result_to_json(status::run(args, &global)),
        Commands::Tag(args) => output::map_cmd_result_to_json(tag::run(args, &global)),
        Commands::Check(args) => output::map_cmd_result_to_json(check::run(args, &global)),
    };

    output::print_json_result(json_result);
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
