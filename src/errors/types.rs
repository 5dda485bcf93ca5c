//! Custom error types for ardi

use std::fmt;

/// Main error type for ardi operations
#[derive(Debug)]
pub enum ArdiError {
    /// No sketch name was given on the command line
    MissingSketch,
    /// The filtered board listing was empty
    NoBoards,
    /// The board chosen from the menu was not a valid index
    InvalidSelection(String),
    /// An arduino-cli invocation exited unsuccessfully
    Toolchain { command: String, message: String },
    /// arduino-cli could not be located
    ToolNotFound(String),
    /// Serial port open/read errors
    Serial(String),
    /// Configuration file errors
    Config(String),
    /// General I/O errors
    Io(std::io::Error),
}

impl fmt::Display for ArdiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArdiError::MissingSketch => write!(f, "Missing sketch argument"),
            ArdiError::NoBoards => write!(f, "No boards detected"),
            ArdiError::InvalidSelection(input) => {
                write!(f, "Invalid board selection: {}", input)
            }
            ArdiError::Toolchain { command, message } => {
                write!(f, "`{}` failed: {}", command, message)
            }
            ArdiError::ToolNotFound(msg) => write!(f, "arduino-cli not found: {}", msg),
            ArdiError::Serial(msg) => write!(f, "Serial error: {}", msg),
            ArdiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ArdiError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ArdiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArdiError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArdiError {
    fn from(err: std::io::Error) -> Self {
        ArdiError::Io(err)
    }
}

impl From<serialport::Error> for ArdiError {
    fn from(err: serialport::Error) -> Self {
        ArdiError::Serial(err.to_string())
    }
}

impl From<toml::de::Error> for ArdiError {
    fn from(err: toml::de::Error) -> Self {
        ArdiError::Config(err.to_string())
    }
}

/// Result type alias for ardi operations
pub type Result<T> = std::result::Result<T, ArdiError>;
