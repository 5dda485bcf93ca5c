//! Compile, upload and optionally watch a sketch

use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

use crate::cli::args::Cli;
use crate::config::AppConfig;
use crate::models::{Sketch, TargetBoard};
use crate::services::{
    compile_and_upload, detect_baud_rate, list_boards, prepare_core, select_board, watch_logs,
};
use crate::toolchain::{ArduinoCli, Toolchain};

/// Everything decided about an invocation before any tool runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub sketch: Sketch,
    pub watch: bool,
    pub baud: u32,
}

impl UploadPlan {
    /// Resolve the sketch and the baud rate.
    ///
    /// The sketch is only scanned for `Serial.begin` when watching, since the
    /// rate is unused otherwise.
    pub fn resolve(
        sketch_arg: Option<&str>,
        watch: bool,
        baud: Option<u32>,
        config: &AppConfig,
    ) -> Result<Self> {
        let sketch = Sketch::resolve(sketch_arg, &config.sketches_dir)
            .context("Must provide a sketch name as an argument to upload")?;

        let mut baud = baud.unwrap_or(config.default_baud);
        if watch {
            baud = resolve_baud(baud, detect_baud_rate(&sketch.main_file));
        }

        Ok(Self {
            sketch,
            watch,
            baud,
        })
    }

    /// `key=value` fields attached to log lines and errors
    pub fn fields(&self) -> String {
        format!(
            "sketch={} baud={} watch={}",
            self.sketch.dir.display(),
            self.baud,
            self.watch
        )
    }
}

/// Prefer a detected, differing rate over the requested one. 0 means nothing was detected.
pub fn resolve_baud(requested: u32, detected: u32) -> u32 {
    if detected != 0 && detected != requested {
        info!("Detected a different baud rate from sketch file");
        info!("Using detected baud rate (detected_baud={})", detected);
        detected
    } else {
        requested
    }
}

/// Prepare the core, pick a board and push the sketch to it
pub fn upload_sketch<R, W>(
    plan: &UploadPlan,
    toolchain: &dyn Toolchain,
    core: &str,
    input: &mut R,
    output: &mut W,
) -> Result<TargetBoard>
where
    R: BufRead,
    W: Write,
{
    let fields = plan.fields();

    info!("Updating arduino core ({})", fields);
    prepare_core(toolchain, core)
        .with_context(|| format!("Failed to update core ({} core={})", fields, core))?;

    info!("Getting board list ({})", fields);
    let listing =
        list_boards(toolchain).with_context(|| format!("Failed to get board list ({})", fields))?;

    info!("Parsing target board ({})", fields);
    let target = select_board(&listing, input, output)
        .with_context(|| format!("Failed to get target board ({})", fields))?;
    info!(
        "Found target (device={} fqbn={} {})",
        target.device, target.fqbn, fields
    );

    info!("Compiling and uploading ({})", fields);
    compile_and_upload(toolchain, &target, &plan.sketch).with_context(|| {
        format!(
            "Failed to compile or upload to board (device={} fqbn={} {})",
            target.device, target.fqbn, fields
        )
    })?;

    Ok(target)
}

/// Execute the default command against the real arduino-cli and serial port
pub fn execute_upload_command(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let plan = UploadPlan::resolve(cli.sketch.as_deref(), cli.watch, cli.baud, &config)?;
    let toolchain = ArduinoCli::locate(&config)?;

    let target = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        upload_sketch(
            &plan,
            &toolchain,
            &config.core,
            &mut stdin.lock(),
            &mut stdout.lock(),
        )?
    };

    if !plan.watch {
        info!("Upload complete ({})", plan.fields());
        return Ok(());
    }

    match watch_logs(&target.device, plan.baud, config.read_chunk_size) {
        Ok(never) => match never {},
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to watch serial port (device={} baud={})",
                target.device, plan.baud
            )
        }),
    }
}
