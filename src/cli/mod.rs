//! Command Line Interface module

pub mod args;
pub mod commands;

pub use args::*;

use anyhow::Result;

/// Main CLI application runner
pub fn run(cli: &Cli) -> Result<()> {
    commands::upload::execute_upload_command(cli)
}
