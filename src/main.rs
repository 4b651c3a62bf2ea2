//! Bob: scaffolding for coding agents.
//!
//! This is the main entry point for the `bob` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and
//! maps errors to exit codes.

pub mod adapters;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod presets;
pub mod templates;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {}", err);
        return ExitCode::from(err.exit_code() as u8);
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // User-actionable message on stderr; stdout stays for command output
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
