//! Inno Setup compiler execution.
//!
//! Compiles the rendered script into the installer executable using ISCC.

use crate::bundler::error::{Error, Result};
use std::path::Path;

/// Output captured from a successful compiler run.
#[derive(Debug, Clone, Default)]
pub struct CompilerOutput {
    /// Standard output of the compiler.
    pub stdout: String,
    /// Standard error of the compiler.
    pub stderr: String,
}

/// Run ISCC against `script_path` and wait for it to finish.
///
/// The script path is the only argument; the compiler decides the output
/// location from the script's `OutputDir`. There is no timeout.
///
/// # Errors
///
/// - [`Error::CommandFailed`] when the compiler cannot be started
/// - [`Error::CompilerFailed`] when it exits unsuccessfully, carrying the
///   exit code and everything it printed
pub async fn run_iscc(compiler: &Path, script_path: &Path) -> Result<CompilerOutput> {
    log::info!("Running {} {}", compiler.display(), script_path.display());

    let output = tokio::process::Command::new(compiler)
        .arg(script_path)
        .output()
        .await
        .map_err(|e| Error::CommandFailed {
            command: compiler.display().to_string(),
            error: e,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        log::error!("Installer compiler output:\n{}{}", stdout, stderr);
        return Err(Error::CompilerFailed {
            compiler: compiler.to_path_buf(),
            code: output.status.code(),
            stdout,
            stderr,
        });
    }

    log::debug!("Installer compiler output:\n{}", stdout);
    Ok(CompilerOutput { stdout, stderr })
}
