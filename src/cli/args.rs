//! CLI argument definitions using clap
//!
//! Commands:
//! - schooldir init --config <path>
//! - schooldir start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// schooldir - A location-aware school directory service
#[derive(Parser, Debug)]
#[command(name = "schooldir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory and write a default config
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./schooldir.json")]
        config: PathBuf,
    },

    /// Start the directory server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./schooldir.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
