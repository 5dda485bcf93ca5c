//! `arduino-cli` subprocess driver

use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use super::Toolchain;
use crate::config::AppConfig;
use crate::errors::{ArdiError, Result};

/// Environment variable that overrides the arduino-cli location
pub const ARDUINO_CLI_ENV: &str = "ARDI_ARDUINO_CLI";

const ARDUINO_CLI_BIN: &str = "arduino-cli";

/// Drives an installed `arduino-cli` binary
#[derive(Debug, Clone)]
pub struct ArduinoCli {
    binary: PathBuf,
}

impl ArduinoCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate arduino-cli: config file first, then `ARDI_ARDUINO_CLI`, then `PATH`
    pub fn locate(config: &AppConfig) -> Result<Self> {
        let env_override = std::env::var_os(ARDUINO_CLI_ENV);
        Self::locate_with(config.arduino_cli.as_deref(), env_override)
    }

    fn locate_with(configured: Option<&Path>, env_override: Option<OsString>) -> Result<Self> {
        if let Some(path) = configured {
            debug!("Using configured arduino-cli: {}", path.display());
            return Ok(Self::new(path));
        }

        if let Some(path) = env_override.filter(|p| !p.is_empty()) {
            debug!("Using arduino-cli from {}: {:?}", ARDUINO_CLI_ENV, path);
            return Ok(Self::new(path));
        }

        let path = which::which(ARDUINO_CLI_BIN).map_err(|e| {
            ArdiError::ToolNotFound(format!(
                "{} (install it or set {} / arduino_cli in ardi.toml)",
                e, ARDUINO_CLI_ENV
            ))
        })?;
        debug!("Found arduino-cli in PATH: {}", path.display());
        Ok(Self::new(path))
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.binary.display(), args.join(" "))
    }

    /// Run with the terminal attached so the user sees build and upload progress
    fn run_attached(&self, args: &[&str]) -> Result<()> {
        let command = self.command_line(args);
        info!("Executing: {}", command);

        let status = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| ArdiError::Toolchain {
                command: command.clone(),
                message: format!("failed to start: {}", e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ArdiError::Toolchain {
                command,
                message: status.to_string(),
            })
        }
    }

    /// Run and hand back stdout instead of printing it
    fn run_captured(&self, args: &[&str]) -> Result<String> {
        let command = self.command_line(args);
        debug!("Executing (captured): {}", command);

        let output: Output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ArdiError::Toolchain {
                command: command.clone(),
                message: format!("failed to start: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            return Err(ArdiError::Toolchain { command, message });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Toolchain for ArduinoCli {
    fn update_index(&self) -> Result<()> {
        self.run_attached(&["core", "update-index"])
    }

    fn install_core(&self, core: &str) -> Result<()> {
        self.run_attached(&["core", "install", core])
    }

    fn board_list(&self) -> Result<String> {
        self.run_captured(&["board", "list"])
    }

    fn compile(&self, fqbn: &str, sketch_dir: &Path) -> Result<()> {
        let sketch = sketch_dir.display().to_string();
        self.run_attached(&["compile", "--fqbn", fqbn, &sketch])
    }

    fn upload(&self, device: &str, fqbn: &str, sketch_dir: &Path) -> Result<()> {
        let sketch = sketch_dir.display().to_string();
        self.run_attached(&["upload", "-p", device, "--fqbn", fqbn, &sketch])
    }
}
