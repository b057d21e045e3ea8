//! CLI command implementations
//!
//! `init` prepares the data directory and writes a default config.
//! `start` loads the config, opens the store once, builds the HTTP server
//! around the shared handle, and serves until the process exits.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::{DiskSchoolStore, MemorySchoolStore, SchoolStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Serve from a memory store instead of the disk store (default: false)
    #[serde(default)]
    pub ephemeral: bool,
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }
        Ok(())
    }

    fn default_for(data_dir: &str) -> Self {
        Self {
            data_dir: data_dir.to_string(),
            http: HttpServerConfig::default(),
            ephemeral: false,
        }
    }
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// `schooldir init`: write a default config file (if absent) and create the
/// data directory.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default_for("./schooldir-data");
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(config_path, content)
            .map_err(|e| CliError::config_error(format!("failed to write config: {}", e)))?;
        config
    };

    fs::create_dir_all(&config.data_dir)
        .map_err(|e| CliError::io_error(format!("failed to create data directory: {}", e)))?;

    Logger::info(
        "INIT_COMPLETE",
        &[
            ("config", &config_path.display().to_string()),
            ("data_dir", config.data_dir.as_str()),
        ],
    );

    Ok(())
}

/// `schooldir start`: open the store, serve HTTP until the process exits.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    Logger::info(
        "CONFIG_LOADED",
        &[
            ("data_dir", config.data_dir.as_str()),
            ("addr", &config.http.socket_addr()),
        ],
    );

    let store: Arc<dyn SchoolStore> = if config.ephemeral {
        Arc::new(MemorySchoolStore::new())
    } else {
        let disk = DiskSchoolStore::open(Path::new(&config.data_dir))
            .map_err(|e| CliError::store_open_failed(e.to_string()))?;
        Logger::info("STORE_OPENED", &[("records", &disk.len().to_string())]);
        Arc::new(disk)
    };

    let server = HttpServer::with_config(store, config.http);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("failed to build runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}
