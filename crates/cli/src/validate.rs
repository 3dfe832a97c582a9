// crates/cli/src/validate.rs
use clap::{ArgMatches, FromArgMatches};

use crate::codes::ExitCode;
use crate::error::CliError;
use crate::options::Opts;

pub fn parse_matches(matches: &ArgMatches) -> Result<Opts, CliError> {
    Opts::from_arg_matches(matches).map_err(|e| CliError::Usage(e.to_string()))
}

/// Reject empty operands before any canonicalization or logging setup runs.
pub fn validate_operands(opts: &Opts) -> Result<(), CliError> {
    if opts.from.is_empty() {
        return Err(pathrel::Error::EmptyPath { name: "FROM" }.into());
    }
    if opts.to.iter().any(String::is_empty) {
        return Err(pathrel::Error::EmptyPath { name: "TO" }.into());
    }
    if opts.base.as_deref() == Some("") {
        return Err(pathrel::Error::EmptyPath { name: "--base" }.into());
    }
    Ok(())
}

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp => ExitCode::Ok,
        DisplayVersion => ExitCode::Ok,
        Io => ExitCode::FileIo,
        Format => ExitCode::FileIo,
        _ => ExitCode::SyntaxOrUsage,
    }
}
