//! Command line argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version)]
#[command(name = "ardi")]
#[command(
    about = "Ardi uploads sketches and prints logs for a variety of arduino boards.",
    long_about = "A light wrapper around arduino-cli that offers a quick way to upload\n\
                  sketches and watch logs from command line for a variety of arduino boards."
)]
pub struct Cli {
    /// Sketch name (looked up in the sketches directory) or path to a sketch directory
    #[arg(value_name = "SKETCH")]
    pub sketch: Option<String>,

    /// Watch serial port logs after uploading sketch
    #[arg(
        short,
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub watch: bool,

    /// Sketch baud rate (overridden by a differing Serial.begin in the sketch)
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Configuration file (defaults to ./ardi.toml, then the user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
