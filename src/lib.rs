//! ardi - compile, upload and watch Arduino sketches from the terminal
//!
//! ardi is a light wrapper around `arduino-cli`. It finds the connected board,
//! compiles and uploads a sketch to it, then streams the board's serial output
//! at the baud rate the sketch configures.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod toolchain;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;
pub use toolchain::Toolchain;
