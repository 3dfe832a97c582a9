// crates/cli/src/version.rs
use std::env;
use std::ffi::OsString;

pub const DEFAULT_PROGRAM_NAME: &str = "relpath";

/// Name used in diagnostics; `RELPATH_PROGRAM_NAME` overrides it.
pub fn program_name() -> String {
    env::var("RELPATH_PROGRAM_NAME")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

pub fn render_version_lines() -> Vec<String> {
    vec![
        format!("{} {}", program_name(), env!("CARGO_PKG_VERSION")),
        format!(
            "{} {}",
            option_env!("BUILD_REVISION").unwrap_or("unknown"),
            option_env!("OFFICIAL_BUILD").unwrap_or("unofficial")
        ),
        format!(
            "Copyright (C) {} relpath contributors.",
            option_env!("CURRENT_YEAR").unwrap_or("2025")
        ),
        "Path conventions: windows (case-insensitive), posix (case-sensitive)".to_string(),
        format!("Host platform: {}", pathrel::Platform::host()),
    ]
}

pub fn version_banner() -> String {
    format!("{}\n", render_version_lines().join("\n"))
}

/// Print the banner if `-V`/`--version` is present; `-q` suppresses it.
pub fn print_version_if_requested<I>(args: I) -> bool
where
    I: IntoIterator<Item = OsString>,
{
    let mut show_version = false;
    let mut quiet = false;
    for arg in args {
        if arg == "--" {
            break;
        } else if arg == "--version" || arg == "-V" {
            show_version = true;
        } else if arg == "--quiet" || arg == "-q" {
            quiet = true;
        }
    }
    if show_version && !quiet {
        print!("{}", version_banner());
    }
    show_version
}
