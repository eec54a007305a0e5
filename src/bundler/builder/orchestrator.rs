//! Main packaging orchestration.
//!
//! This module provides the [`Bundler`] that runs the pipeline stages in
//! order against one [`Settings`].

use super::{
    collector::{CollectReport, collect_dependencies},
    staging::StagingDir,
};
use crate::{
    bundler::{
        Result, Settings,
        error::Context,
        platform::windows::inno::{self, CompilerOutput},
    },
    metadata,
};
use std::path::PathBuf;

/// Result of a packaging run.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Version string embedded in the installer script.
    pub version: String,
    /// Staging directory holding the assembled tree.
    pub staging_dir: PathBuf,
    /// Rendered installer script.
    pub script_path: PathBuf,
    /// Dependencies copied and skipped.
    pub collected: CollectReport,
    /// Compiler output, `None` when compilation was skipped.
    pub compiler_output: Option<CompilerOutput>,
}

/// Packaging orchestrator.
///
/// Runs the stages strictly in sequence:
///
/// 1. wipe and recreate the staging directory
/// 2. collect dependencies into `dist_files/`
/// 3. copy `installer_files/` into staging
/// 4. resolve the version from the build metadata
/// 5. render the installer script
/// 6. compile it with ISCC
///
/// Any error after step 1 aborts the run; missing dependencies in step 2
/// are not errors and are returned in the report.
///
/// # Examples
///
/// ```no_run
/// use strainpp_installer::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> strainpp_installer::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .toolchain_dir(r"D:\msys64\mingw64")
///     .build_dir(r"D:\strainpp\cmake-build-release")
///     .build()?;
///
/// let report = Bundler::new(settings).bundle().await?;
/// println!("Packaged version {}", report.version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Executes the full pipeline.
    pub async fn bundle(&self) -> Result<BundleReport> {
        let settings = &self.settings;

        let staging =
            StagingDir::prepare(settings.staging_dir(), settings.clean_on_failure()).await?;

        let collected = collect_dependencies(
            settings.manifest(),
            settings.toolchain_dir(),
            settings.build_dir(),
            &settings.dist_dir(),
        )
        .await?;

        inno::stage_resources(settings)
            .await
            .context("staging installer resources")?;

        let version = metadata::resolve_version(settings.version_file())
            .await
            .context("resolving installer version")?;

        let script_path = inno::generate_script(settings, &version)
            .await
            .context("rendering installer script")?;

        warn_missing(&collected);

        let compiler_output = if settings.compile() {
            let context = if collected.is_complete() {
                "compiling installer".to_string()
            } else {
                format!(
                    "compiling installer ({} dependencies missing)",
                    collected.failures.len()
                )
            };
            Some(
                inno::compile_installer(settings, &script_path)
                    .await
                    .context(context)?,
            )
        } else {
            log::info!("Skipping installer compilation");
            None
        };

        Ok(BundleReport {
            version,
            staging_dir: staging.finish(),
            script_path,
            collected,
            compiler_output,
        })
    }
}

/// Logs the dependencies that did not make it into staging.
fn warn_missing(collected: &CollectReport) {
    if collected.is_complete() {
        return;
    }
    log::warn!(
        "{} dependencies were missing and are not in the installer:",
        collected.failures.len()
    );
    for failure in &collected.failures {
        log::warn!("  {}", failure.source.display());
    }
}
