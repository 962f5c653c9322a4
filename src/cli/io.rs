//! JSON output helpers for the CLI
//!
//! One-shot commands write a single JSON object to stdout, UTF-8 only.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Serialize a value as pretty JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stderr.
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stderr = io::stderr();
    serde_json::to_writer(&mut stderr, &response)?;
    writeln!(stderr)?;
    stderr.flush()?;

    Ok(())
}
