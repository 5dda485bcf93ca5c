//! Core preparation, compile and upload

use log::info;

use crate::errors::Result;
use crate::models::{Sketch, TargetBoard};
use crate::toolchain::Toolchain;

/// Refresh the core index and make sure `core` is installed
pub fn prepare_core(toolchain: &dyn Toolchain, core: &str) -> Result<()> {
    info!("Updating core index");
    toolchain.update_index()?;
    info!("Installing core {}", core);
    toolchain.install_core(core)
}

/// Compile the sketch for the target, then upload it. Stops at the first failure.
pub fn compile_and_upload(
    toolchain: &dyn Toolchain,
    target: &TargetBoard,
    sketch: &Sketch,
) -> Result<()> {
    info!("Compiling {} for {}", sketch.dir.display(), target.fqbn);
    toolchain.compile(&target.fqbn, &sketch.dir)?;

    info!("Uploading {} to {}", sketch.dir.display(), target.device);
    toolchain.upload(&target.device, &target.fqbn, &sketch.dir)
}
