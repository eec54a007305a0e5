//! Windows installer creation with Inno Setup.
//!
//! # Module Organization
//!
//! - `script` - template rendering and installer resource staging
//! - `toolset` - ISCC location
//! - `build` - ISCC execution

mod build;
mod script;
mod toolset;

pub use build::{CompilerOutput, run_iscc};
pub use script::{generate_script, render_script, stage_resources, write_script};
pub use toolset::{DEFAULT_ISCC_PATH, get_iscc};

use crate::bundler::{error::Result, settings::Settings};
use std::path::Path;

/// Compile the rendered script at `script_path` into the installer.
///
/// The compiler is resolved first so a missing Inno Setup installation is
/// reported before anything runs.
pub async fn compile_installer(settings: &Settings, script_path: &Path) -> Result<CompilerOutput> {
    let compiler = get_iscc(settings.inno().compiler.as_deref())?;
    let output = run_iscc(&compiler, script_path).await?;
    log::info!("✓ Compiled installer from {}", script_path.display());
    Ok(output)
}
