//! CLI argument definitions using clap
//!
//! Commands:
//! - stringdb serve --config <path> [--port <port>]
//! - stringdb analyze <text>
//! - stringdb interpret <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stringdb - A deterministic, self-hostable string analysis store
#[derive(Parser, Debug)]
#[command(name = "stringdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./stringdb.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a string and print its properties as JSON
    Analyze {
        /// The string to analyze
        text: String,
    },

    /// Interpret a natural-language query and print the parsed filter
    Interpret {
        /// The free-text query
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
