//! Application configuration.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Sources
//!
//! 1. An optional JSON file with the public base URL and listen port:
//!
//! ```json
//! { "url": "https://s.example.com", "port": 3000 }
//! ```
//!
//!    The file is read from `CONFIG_FILE` if set (and must then exist), or
//!    from `config.json` in the working directory if that file exists.
//!
//! 2. Environment variables, which override the file:
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! export PORT="3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Public prefix for short links (default: `http://localhost:3000`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Listen port (default: `3000`)
//! - `DB_FILE` - Snapshot file path (default: `db.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Contents of the optional JSON config file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    url: Option<String>,
    port: Option<u16>,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public prefix short links are built from (`{base_url}/{id}`).
    pub base_url: String,
    pub host: String,
    pub port: u16,
    /// Path of the JSON snapshot holding all mappings.
    pub db_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// The config file that was read, if any.
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the optional config file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CONFIG_FILE` points to a missing or malformed file,
    /// or if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let (config_file, file) = Self::load_file_config()?;

        let base_url = env::var("BASE_URL")
            .ok()
            .or(file.url)
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => file.port.unwrap_or(3000),
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let db_file = env::var("DB_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("db.json"));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            host,
            port,
            db_file,
            log_level,
            log_format,
            config_file,
        })
    }

    /// Reads the JSON config file.
    ///
    /// Priority:
    /// 1. `CONFIG_FILE` environment variable (file must exist)
    /// 2. `config.json` in the working directory, if present
    fn load_file_config() -> Result<(Option<PathBuf>, FileConfig)> {
        if let Ok(path) = env::var("CONFIG_FILE") {
            let path = PathBuf::from(path);
            let file = Self::read_file_config(&path)?;
            return Ok((Some(path), file));
        }

        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if path.exists() {
            let file = Self::read_file_config(&path)?;
            return Ok((Some(path), file));
        }

        Ok((None, FileConfig::default()))
    }

    fn read_file_config(path: &Path) -> Result<FileConfig> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `log_format` is not `text` or `json`
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `db_file` is empty
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.db_file.as_os_str().is_empty() {
            anyhow::bail!("DB_FILE must not be empty");
        }

        Ok(())
    }

    /// Address the server binds to, `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        match &self.config_file {
            Some(path) => tracing::info!("  Config file: {}", path.display()),
            None => tracing::info!("  Config file: none"),
        }
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Public base URL: {}", self.base_url);
        tracing::info!("  Snapshot file: {}", self.db_file.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration.
///
/// # Errors
///
/// Returns an error if loading or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
