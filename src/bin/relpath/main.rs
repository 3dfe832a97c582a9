// src/bin/relpath/main.rs
use relpath_cli::{cli_command, handle_clap_error, program_name, report_exit};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    if relpath_cli::print_version_if_requested(args.iter().cloned()) {
        return;
    }
    let matches = cli_command()
        .try_get_matches_from(&args)
        .unwrap_or_else(|e| handle_clap_error(e));
    if let Err(e) = relpath_cli::run(&matches) {
        let code = e.exit_code();
        eprintln!("{}: {e}", program_name());
        report_exit(code);
        std::process::exit(i32::from(code));
    }
}
