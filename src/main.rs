//! Phoenix - shortest paths and connectivity over edge-list graphs
//!
//! Loads a graph from an edge-list file and reports traversal order,
//! shortest-path trees, and eccentricity metrics.

mod cli;
mod commands;

use std::env;
use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use phoenix_core::error::{ExitCode as PhoenixExitCode, PhoenixError};
use phoenix_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "cli_parsed");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(PhoenixExitCode::Success),
        Err(e) => report_error(&cli, &e),
    }
}

/// Parse argv, printing clap's own message unless JSON output was asked
/// for, in which case the failure becomes a JSON envelope on stderr.
fn parse_cli() -> Result<Cli, ExitCode> {
    let args: Vec<OsString> = env::args_os().collect();
    let err = match Cli::try_parse_from(&args) {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !wants_json(args.get(1..).unwrap_or(&[])) {
        err.exit();
    }

    let error = clap_error(&err);
    eprintln!("{}", error.to_json());
    Err(exit_with(error.exit_code()))
}

/// Scan raw arguments for `--format json`; the parsed `Cli` is not
/// available when clap rejects the command line.
fn wants_json(args: &[OsString]) -> bool {
    args.iter().enumerate().any(|(i, arg)| match arg.to_str() {
        Some("--format=json") => true,
        Some("--format") => args.get(i + 1).and_then(|v| v.to_str()) == Some("json"),
        _ => false,
    })
}

fn clap_error(err: &clap::Error) -> PhoenixError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => PhoenixError::UsageError(err.to_string()),
        _ => PhoenixError::Other(err.to_string()),
    }
}

fn report_error(cli: &Cli, error: &PhoenixError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
    exit_with(error.exit_code())
}

fn exit_with(code: PhoenixExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
