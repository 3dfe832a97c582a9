// crates/cli/src/lib.rs
//! Command-line front end for `relpath`.
//!
//! The binary parses arguments with [`cli_command`], intercepts
//! `--version`, and hands the matches to [`run`]. Errors come back as
//! [`CliError`], whose [`exit_code`](CliError::exit_code) picks the process
//! status.

use std::io::{self, Write};

use clap::ArgMatches;
use pathrel::{Relativizer, common_path_length};
use tracing::info;
use tracing::subscriber::with_default;

mod codes;
mod error;
pub mod options;
mod print;
mod validate;
mod version;

pub use codes::{ExitCode, UnknownExit};
pub use error::CliError;
pub use options::{Opts, PlatformArg, cli_command};
pub use print::{Printer, Record, handle_clap_error, report_exit};
pub use validate::{exit_code_from_error_kind, parse_matches, validate_operands};
pub use version::{print_version_if_requested, program_name, render_version_lines, version_banner};

/// Run with parsed matches, writing results to stdout.
pub fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let opts = parse_matches(matches)?;
    let stdout = io::stdout();
    run_with(&opts, stdout.lock())
}

/// Run `opts`, writing results to `out` under a subscriber built from the
/// logging flags.
pub fn run_with<W: Write>(opts: &Opts, out: W) -> Result<(), CliError> {
    validate_operands(opts)?;
    let sub = logging::subscriber(opts.subscriber_config())?;
    with_default(sub, || execute(opts, out))
}

fn execute<W: Write>(opts: &Opts, out: W) -> Result<(), CliError> {
    let platform = opts.platform.resolve();
    let mut printer = Printer::new(out, opts.json, opts.null);
    if opts.common_length {
        let ignore_case = opts.ignore_case(platform);
        for to in &opts.to {
            let common_length = common_path_length(&opts.from, to, ignore_case, platform);
            info!(
                op = "common_length",
                from = %opts.from,
                to = %to,
                common_length,
                "scanned"
            );
            printer.print(&Record::CommonLength {
                from: &opts.from,
                to,
                common_length,
            })?;
        }
    } else {
        let rel = match &opts.base {
            Some(base) => Relativizer::new(platform, base.as_str())?,
            None => Relativizer::current(platform)?,
        };
        for to in &opts.to {
            let relative = rel.relative_path(&opts.from, to)?;
            info!(
                op = "relative",
                from = %opts.from,
                to = %to,
                relative = %relative,
                "computed"
            );
            printer.print(&Record::Relative {
                from: &opts.from,
                to,
                relative,
            })?;
        }
    }
    printer.finish()?;
    Ok(())
}
