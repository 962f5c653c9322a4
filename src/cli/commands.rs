//! CLI command implementations
//!
//! `serve` builds the store from configuration and runs the HTTP server
//! inside its own tokio runtime. `analyze` and `interpret` are one-shot
//! commands: compute, print JSON, exit.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::analyzer::{analyze, character_frequency};
use crate::config::ServiceConfig;
use crate::query::interpret;
use crate::rest_api::ApiServer;
use crate::store::{MemoryStore, StringStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Analyze { text } => analyze_command(&text),
        Command::Interpret { query } => interpret_command(&query),
    }
}

/// Start the HTTP server.
///
/// Boot sequence:
/// 1. Load configuration (defaults if the file is absent)
/// 2. Build the record store, loading the snapshot if configured
/// 3. Bind and serve
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = ServiceConfig::load(config_path)?;
    if let Some(port) = port_override {
        config.port = port;
    }

    let store: Arc<dyn StringStore> = match &config.snapshot_path {
        Some(path) => {
            let store = MemoryStore::with_snapshot(path.clone())
                .map_err(|e| CliError::boot_failed(format!("Snapshot load failed: {}", e)))?;
            Arc::new(store)
        }
        None => Arc::new(MemoryStore::new()),
    };

    let server = ApiServer::new(store, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Analyze a string and print the full property set.
fn analyze_command(text: &str) -> CliResult<()> {
    let properties = analyze(text);
    let frequency = character_frequency(text);

    write_json(&json!({
        "value": text,
        "properties": properties,
        "character_frequency_map": frequency,
    }))
}

/// Interpret a natural-language query and print the parsed filter.
fn interpret_command(query: &str) -> CliResult<()> {
    let filter = interpret(query);

    write_json(&json!({
        "original": query,
        "parsed_filters": filter,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_analyze_command_runs() {
        analyze_command("racecar").unwrap();
    }

    #[test]
    fn test_interpret_command_runs() {
        interpret_command("all palindromes").unwrap();
    }

    #[test]
    fn test_serve_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stringdb.json");
        fs::write(&path, "{ broken").unwrap();

        let result = serve(&path, None);
        assert!(result.is_err());
    }
}
