//! schooldir entry point
//!
//! Parses CLI arguments, dispatches to the cli module, prints errors to
//! stderr, and exits non-zero on failure. Configuration loading, store
//! opening, and serving all live behind cli::run.

use schooldir::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
