// crates/cli/src/options.rs

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use logging::{DebugFlag, LogFormat, SubscriberConfig};
use pathrel::Platform;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum PlatformArg {
    #[default]
    Host,
    Windows,
    Posix,
}

impl PlatformArg {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformArg::Host => Platform::host(),
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Posix => Platform::Posix,
        }
    }
}

/// Print the path of each TO relative to FROM.
#[derive(Parser, Debug)]
#[command(name = "relpath", disable_version_flag = true)]
pub struct Opts {
    #[arg(
        long,
        value_enum,
        default_value_t = PlatformArg::Host,
        env = "RELPATH_PLATFORM",
        help_heading = "Paths",
        help = "path conventions to apply"
    )]
    pub platform: PlatformArg,
    #[arg(
        long,
        value_name = "DIR",
        help_heading = "Paths",
        help = "resolve relative operands against DIR instead of the working directory"
    )]
    pub base: Option<String>,
    #[arg(
        long = "common-length",
        help_heading = "Paths",
        help = "print the length of the shared segment-aligned prefix"
    )]
    pub common_length: bool,
    #[arg(
        long = "ignore-case",
        requires = "common_length",
        conflicts_with = "case_sensitive",
        help_heading = "Paths"
    )]
    pub ignore_case: bool,
    #[arg(long = "case-sensitive", requires = "common_length", help_heading = "Paths")]
    pub case_sensitive: bool,
    #[arg(long, help_heading = "Output", help = "print one JSON object per operand")]
    pub json: bool,
    #[arg(
        short = '0',
        long = "null",
        help_heading = "Output",
        help = "terminate records with NUL instead of newline"
    )]
    pub null: bool,
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, help_heading = "Logging")]
    pub log_format: LogFormat,
    #[arg(
        long,
        value_enum,
        value_name = "FLAG",
        action = ArgAction::Append,
        help_heading = "Logging"
    )]
    pub debug: Vec<DebugFlag>,
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Logging")]
    pub log_file: Option<PathBuf>,
    #[arg(
        long = "log-file-format",
        value_name = "FMT",
        requires = "log_file",
        help_heading = "Logging"
    )]
    pub log_file_format: Option<String>,
    #[arg(short = 'V', long, action = ArgAction::SetTrue, help = "print version information")]
    pub version: bool,
    #[arg(value_name = "FROM")]
    pub from: String,
    #[arg(value_name = "TO", required = true, num_args = 1..)]
    pub to: Vec<String>,
}

impl Opts {
    /// Case rule for `--common-length`: explicit flags win over the platform.
    pub fn ignore_case(&self, platform: Platform) -> bool {
        if self.ignore_case {
            true
        } else if self.case_sensitive {
            false
        } else {
            platform.ignore_case()
        }
    }

    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .debug(&self.debug)
            .quiet(self.quiet)
            .log_file(
                self.log_file
                    .clone()
                    .map(|path| (path, self.log_file_format.clone())),
            )
            .colored(false)
            .build()
    }
}

pub fn cli_command() -> clap::Command {
    Opts::command()
}
