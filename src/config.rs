//! Service configuration
//!
//! Loaded from a JSON file (`stringdb.json` by default). A missing file
//! yields the defaults; an unreadable or invalid file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted value size: 1 MiB of UTF-8.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 1_048_576;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 7878)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty = permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum accepted value size in UTF-8 bytes (default: 1 MiB)
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,

    /// Snapshot file for the record store; absent means purely in-memory
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7878
}

fn default_max_value_bytes() -> usize {
    DEFAULT_MAX_VALUE_BYTES
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            max_value_bytes: default_max_value_bytes(),
            snapshot_path: None,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Read(e.to_string())),
        };

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate field constraints.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value_bytes == 0 {
            return Err(ConfigError::Invalid("max_value_bytes must be > 0".to_string()));
        }

        Ok(())
    }

    /// Create a config with a specific port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
