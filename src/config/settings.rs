//! Application settings: where the store lives, where the seed document is,
//! and which address the HTTP server binds to.
//!
//! Values are resolved in three layers, later layers winning:
//! built-in defaults, an optional `config.toml`, then environment variables
//! (`DATABASE_URL`, `SEED_PATH`, `BIND_ADDRESS`, `.env` supported).

use crate::config::{database::DEFAULT_DATABASE_URL, seed::DEFAULT_SEED_PATH};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Default settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Fully resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection URL of the store
    pub database_url: String,
    /// Location of the JSON seed document
    pub seed_path: PathBuf,
    /// Socket address the HTTP server listens on
    pub bind_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl AppConfig {
    /// Applies environment overrides, looking each variable up through `lookup`.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(path) = lookup("SEED_PATH") {
            self.seed_path = PathBuf::from(path);
        }
        if let Some(address) = lookup("BIND_ADDRESS") {
            self.bind_address = address;
        }
        self
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Parses TOML settings text. Missing keys keep their defaults.
///
/// # Errors
/// Returns [`Error::Config`] if the text is not valid TOML.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Resolves the settings used by the binary: defaults, then `config.toml` when
/// it exists, then process environment variables.
///
/// # Errors
/// Returns an error if `config.toml` exists but cannot be loaded.
pub fn load_app_configuration() -> Result<AppConfig> {
    let base = if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)?
    } else {
        debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        AppConfig::default()
    };

    let config = base.with_overrides(|key| std::env::var(key).ok());
    info!(
        database_url = %config.database_url,
        seed_path = ?config.seed_path,
        bind_address = %config.bind_address,
        "Resolved application configuration"
    );
    Ok(config)
}
