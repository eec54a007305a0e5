//! Configuration file loading and merging with command line arguments.
//!
//! ```toml
//! [paths]
//! toolchain = 'D:\Programming\packages\msys64\mingw64'
//! build_dir = 'D:\Work\strainpp\cmake-build-release'
//! compiler = 'C:\Program Files (x86)\Inno Setup 6\ISCC.exe'
//!
//! [manifest]
//! extra_files = ['D:\Programming\libraries\qcustomplot\2.0.1\lib\qcustomplot2.dll']
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.

use super::Args;
use crate::{
    bundler::{DependencyManifest, Settings, SettingsBuilder},
    error::{BundlerError, CliError, Result},
};
use anyhow::Context as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of the TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Dependency manifest overrides.
    pub manifest: DependencyManifest,
}

/// `[paths]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub toolchain: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub compiler: Option<PathBuf>,
    pub resources: Option<PathBuf>,
    pub staging: Option<PathBuf>,
    pub version_file: Option<PathBuf>,
}

impl PackagingConfig {
    /// Reads the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&text)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Makes relative paths relative to `base`.
    fn rebase(&mut self, base: &Path) {
        let paths = &mut self.paths;
        for slot in [
            &mut paths.toolchain,
            &mut paths.build_dir,
            &mut paths.compiler,
            &mut paths.resources,
            &mut paths.staging,
            &mut paths.version_file,
        ] {
            if let Some(p) = slot.as_mut() {
                *p = rebase_path(base, p);
            }
        }
        for p in self.manifest.extra_files.iter_mut() {
            *p = rebase_path(base, p);
        }
    }
}

fn rebase_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Builds [`Settings`] from arguments layered over the optional config file.
///
/// Command line values (including their environment variables) take
/// precedence over the file; `--extra-file` entries are appended to the
/// file's `extra_files`.
pub fn build_settings(args: &Args) -> Result<Settings> {
    let config = match &args.config {
        Some(path) => PackagingConfig::load(path)?,
        None => PackagingConfig::default(),
    };
    let PackagingConfig { paths, mut manifest } = config;

    let toolchain = args
        .toolchain
        .clone()
        .or(paths.toolchain)
        .ok_or_else(|| missing("--toolchain"))?;
    let build_dir = args
        .build_dir
        .clone()
        .or(paths.build_dir)
        .ok_or_else(|| missing("--build-dir"))?;

    manifest.extra_files.extend(args.extra_files.iter().cloned());

    let mut builder = SettingsBuilder::new()
        .toolchain_dir(toolchain)
        .build_dir(build_dir)
        .manifest(manifest)
        .clean_on_failure(args.clean_on_failure)
        .skip_compile(args.no_compile);

    if let Some(resources) = args.resources.clone().or(paths.resources) {
        builder = builder.resources_dir(resources);
    }
    if let Some(staging) = args.staging.clone().or(paths.staging) {
        builder = builder.staging_dir(staging);
    }
    if let Some(version_file) = args.version_file.clone().or(paths.version_file) {
        builder = builder.version_file(version_file);
    }
    if let Some(compiler) = args.compiler.clone().or(paths.compiler) {
        builder = builder.compiler(compiler);
    }

    Ok(builder.build()?)
}

/// Resolves just the version metadata path, for `--print-version`.
///
/// Only the build directory (or an explicit version file) is needed.
pub fn version_file(args: &Args) -> Result<PathBuf> {
    let paths = match &args.config {
        Some(path) => PackagingConfig::load(path)?.paths,
        None => PathsConfig::default(),
    };

    if let Some(file) = args.version_file.clone().or(paths.version_file) {
        return Ok(file);
    }
    let build_dir = args
        .build_dir
        .clone()
        .or(paths.build_dir)
        .ok_or_else(|| missing("--build-dir"))?;
    Ok(build_dir.join("src").join("version.cpp"))
}

fn missing(argument: &str) -> BundlerError {
    CliError::MissingArgument {
        argument: argument.to_string(),
    }
    .into()
}
