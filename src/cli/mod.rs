//! CLI module for stringdb
//!
//! Provides the command-line interface:
//! - serve: boot the store and run the HTTP server
//! - analyze: one-shot string analysis to stdout
//! - interpret: one-shot natural-language query interpretation to stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_json};
