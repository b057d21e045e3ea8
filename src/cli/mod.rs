//! CLI module for schooldir
//!
//! Commands:
//! - init: create the data directory and a default config file
//! - start: open the store and serve HTTP until the process exits

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, start, Config};
pub use errors::{CliError, CliResult};

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
