//! External toolchain boundary
//!
//! ardi never compiles or flashes anything itself. Every step that touches a
//! board goes through a [`Toolchain`], which in production is the
//! `arduino-cli` binary and in tests a scripted fake.

pub mod arduino_cli;

pub use arduino_cli::ArduinoCli;

use std::path::Path;

use crate::errors::Result;

/// Operations ardi needs from the board-management/compiler tool
pub trait Toolchain {
    /// Refresh the core package index
    fn update_index(&self) -> Result<()>;

    /// Install (or confirm installation of) a platform core such as `arduino:avr`
    fn install_core(&self, core: &str) -> Result<()>;

    /// Enumerate connected boards, returning the tool's text table
    fn board_list(&self) -> Result<String>;

    /// Compile the sketch in `sketch_dir` for `fqbn`
    fn compile(&self, fqbn: &str, sketch_dir: &Path) -> Result<()>;

    /// Upload the compiled sketch to the board on `device`
    fn upload(&self, device: &str, fqbn: &str, sketch_dir: &Path) -> Result<()>;
}
