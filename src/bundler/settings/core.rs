//! Core Settings struct and implementations.

use super::{DependencyManifest, InnoSettings};
use std::path::{Path, PathBuf};

/// Name of the distribution folder inside the staging directory.
pub const DIST_SUBDIR: &str = "dist_files";

/// Main settings for a packaging run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which fills in
/// defaults and validates that the staging directory cannot swallow any
/// input directory when it is wiped.
///
/// # Staging layout
///
/// ```text
/// <staging>/
///   dist_files/            runtime libraries, executable
///     imageformats/
///     styles/
///     platforms/
///   installer_files/       copied from <resources>/installer_files
///   strainpp.iss           rendered installer script
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// MinGW toolchain root (contains `bin/` and `share/qt5/plugins/`).
    toolchain_dir: PathBuf,

    /// Build output root (contains the executable and `src/version.cpp`).
    build_dir: PathBuf,

    /// Directory holding the template and the static resource directory.
    resources_dir: PathBuf,

    /// Ephemeral working tree, wiped at the start of every run.
    staging_dir: PathBuf,

    /// Generated metadata file with the git constants.
    version_file: PathBuf,

    /// Files to collect.
    manifest: DependencyManifest,

    /// Installer compiler configuration.
    inno: InnoSettings,

    /// Remove the staging directory when the run fails.
    clean_on_failure: bool,

    /// Run the installer compiler after rendering.
    compile: bool,
}

impl Settings {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        toolchain_dir: PathBuf,
        build_dir: PathBuf,
        resources_dir: PathBuf,
        staging_dir: PathBuf,
        version_file: PathBuf,
        manifest: DependencyManifest,
        inno: InnoSettings,
        clean_on_failure: bool,
        compile: bool,
    ) -> Self {
        Self {
            toolchain_dir,
            build_dir,
            resources_dir,
            staging_dir,
            version_file,
            manifest,
            inno,
            clean_on_failure,
            compile,
        }
    }

    /// Returns the toolchain root.
    pub fn toolchain_dir(&self) -> &Path {
        &self.toolchain_dir
    }

    /// Returns the build output root.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Returns the installer resources root.
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Returns the staging directory.
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Returns the version metadata file.
    pub fn version_file(&self) -> &Path {
        &self.version_file
    }

    /// Returns the dependency manifest.
    pub fn manifest(&self) -> &DependencyManifest {
        &self.manifest
    }

    /// Returns the installer settings.
    pub fn inno(&self) -> &InnoSettings {
        &self.inno
    }

    /// Whether a failed run removes the staging directory.
    pub fn clean_on_failure(&self) -> bool {
        self.clean_on_failure
    }

    /// Whether the installer compiler runs after rendering.
    pub fn compile(&self) -> bool {
        self.compile
    }

    /// Distribution folder receiving collected dependencies.
    pub fn dist_dir(&self) -> PathBuf {
        self.staging_dir.join(DIST_SUBDIR)
    }

    /// Installer-definition template.
    pub fn template_path(&self) -> PathBuf {
        self.resources_dir.join(&self.inno.template_name)
    }

    /// Static resource directory to copy.
    pub fn resources_source_dir(&self) -> PathBuf {
        self.resources_dir.join(&self.inno.resources_subdir)
    }

    /// Where the static resources land inside staging.
    pub fn resources_staged_dir(&self) -> PathBuf {
        self.staging_dir.join(&self.inno.resources_subdir)
    }

    /// Rendered installer script.
    pub fn script_path(&self) -> PathBuf {
        self.staging_dir.join(&self.inno.script_name)
    }
}
