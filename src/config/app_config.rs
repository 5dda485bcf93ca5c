//! Application configuration management

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{ArdiError, Result};

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "ardi.toml";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Baud rate used when neither `--baud` nor the sketch sets one
    pub default_baud: u32,
    /// Directory bare sketch names are resolved against
    pub sketches_dir: PathBuf,
    /// Core installed before listing boards
    pub core: String,
    /// Explicit path to the arduino-cli binary
    pub arduino_cli: Option<PathBuf>,
    /// Size of each serial read while watching logs
    pub read_chunk_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_baud: 9600,
            sketches_dir: PathBuf::from("sketches"),
            core: "arduino:avr".to_string(),
            arduino_cli: None,
            read_chunk_size: 128,
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        if config.read_chunk_size == 0 {
            return Err(ArdiError::Config(
                "read_chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ArdiError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ArdiError::Config(msg) => {
                ArdiError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Load configuration, falling back through the usual locations.
    ///
    /// An explicit path must exist. Otherwise `./ardi.toml` is tried, then
    /// `<config dir>/ardi/config.toml`, then the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                debug!("Loading configuration from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("ardi").join("config.toml"));
        }
        paths
    }
}
