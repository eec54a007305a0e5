//! Inno Setup compiler location.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Executable names tried on `PATH`.
const ISCC_NAMES: [&str; 2] = ["ISCC", "iscc"];

/// Default Inno Setup 6 install location.
pub const DEFAULT_ISCC_PATH: &str = r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe";

/// Get the installer compiler.
///
/// An explicitly configured path is used as-is. Otherwise `ISCC` is looked
/// up on `PATH`, then at the default install location.
pub fn get_iscc(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    for name in ISCC_NAMES {
        if let Ok(path) = which::which(name) {
            log::debug!("Found {} at: {}", name, path.display());
            return Ok(path);
        }
    }

    let default = PathBuf::from(DEFAULT_ISCC_PATH);
    if default.is_file() {
        return Ok(default);
    }

    Err(Error::CompilerNotFound(
        "ISCC is not on PATH and Inno Setup 6 is not installed at the default location. \
         Pass --compiler or set STRAINPP_ISCC"
            .into(),
    ))
}
