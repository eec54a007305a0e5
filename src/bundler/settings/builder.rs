//! Builder for constructing Settings.

use super::{DependencyCategory, DependencyManifest, InnoSettings, Settings};
use crate::bundler::error::{Context, Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Name of the staging directory created under the resources root by default.
pub const DEFAULT_STAGING_SUBDIR: &str = "temp";

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use strainpp_installer::bundler::SettingsBuilder;
///
/// # fn example() -> strainpp_installer::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .toolchain_dir(r"D:\msys64\mingw64")
///     .build_dir(r"D:\strainpp\cmake-build-release")
///     .resources_dir("scripts/create_installer")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    toolchain_dir: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    resources_dir: Option<PathBuf>,
    staging_dir: Option<PathBuf>,
    version_file: Option<PathBuf>,
    manifest: DependencyManifest,
    inno: InnoSettings,
    clean_on_failure: bool,
    skip_compile: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the MinGW toolchain root.
    ///
    /// # Required
    pub fn toolchain_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.toolchain_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build output root.
    ///
    /// # Required
    pub fn build_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory holding the template and `installer_files/`.
    ///
    /// Default: current directory
    pub fn resources_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resources_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the staging directory. Everything inside it is deleted on each run.
    ///
    /// Default: `<resources>/temp`
    pub fn staging_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the version metadata file.
    ///
    /// Default: `<build>/src/version.cpp`
    pub fn version_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.version_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the dependency manifest.
    ///
    /// Default: [`DependencyManifest::default`]
    pub fn manifest(mut self, manifest: DependencyManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Sets the installer compiler executable.
    pub fn compiler<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inno.compiler = Some(path.as_ref().to_path_buf());
        self
    }

    /// Remove the staging directory when the run fails.
    ///
    /// Default: false (failed staging is kept for inspection)
    pub fn clean_on_failure(mut self, clean: bool) -> Self {
        self.clean_on_failure = clean;
        self
    }

    /// Stop after rendering the script.
    ///
    /// Default: false
    pub fn skip_compile(mut self, skip: bool) -> Self {
        self.skip_compile = skip;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `toolchain_dir` or `build_dir` is missing, or if
    /// wiping the staging directory could touch any input.
    pub fn build(self) -> Result<Settings> {
        let toolchain_dir = self
            .toolchain_dir
            .context("toolchain directory is required")?;
        let build_dir = self.build_dir.context("build directory is required")?;
        let resources_dir = self.resources_dir.unwrap_or_else(|| PathBuf::from("."));
        let staging_dir = self
            .staging_dir
            .unwrap_or_else(|| resources_dir.join(DEFAULT_STAGING_SUBDIR));
        let version_file = self
            .version_file
            .unwrap_or_else(|| build_dir.join("src").join("version.cpp"));

        if self.inno.version_placeholder.is_empty() {
            return Err(Error::Config("version placeholder must not be empty".into()));
        }

        let staging_abs = absolute(&staging_dir, "resolving staging directory")?;

        check_root_outside(&staging_abs, "toolchain", &toolchain_dir)?;
        check_root_outside(&staging_abs, "build", &build_dir)?;
        check_root_outside(&staging_abs, "resources", &resources_dir)?;

        let mut inputs: Vec<(&str, PathBuf)> = vec![
            (
                "installer resources",
                resources_dir.join(&self.inno.resources_subdir),
            ),
            ("installer template", resources_dir.join(&self.inno.template_name)),
            ("version metadata", version_file.clone()),
            ("executable", build_dir.join(&self.manifest.executable)),
        ];
        for category in DependencyCategory::ALL {
            inputs.push(("toolchain library", category.source_dir(&toolchain_dir)));
        }
        for extra in &self.manifest.extra_files {
            inputs.push(("extra file", extra.clone()));
        }
        for (label, input) in &inputs {
            check_input_disjoint(&staging_abs, label, input)?;
        }

        Ok(Settings::new(
            toolchain_dir,
            build_dir,
            resources_dir,
            staging_dir,
            version_file,
            self.manifest,
            self.inno,
            self.clean_on_failure,
            !self.skip_compile,
        ))
    }
}

fn absolute(path: &Path, context: &'static str) -> Result<PathBuf> {
    Ok(path.absolutize().fs_context(context, path)?.into_owned())
}

/// Rejects a staging directory whose wipe would delete the `root` directory.
///
/// Staging may live inside a root (the default is `<resources>/temp`).
fn check_root_outside(staging: &Path, label: &str, root: &Path) -> Result<()> {
    let root_abs = absolute(root, "resolving input directory")?;
    if root_abs.starts_with(staging) {
        return Err(Error::Config(format!(
            "staging directory {} would delete the {label} directory {}",
            staging.display(),
            root.display()
        )));
    }
    Ok(())
}

/// Rejects a staging directory that overlaps a concrete input in either direction.
fn check_input_disjoint(staging: &Path, label: &str, input: &Path) -> Result<()> {
    let input_abs = absolute(input, "resolving input path")?;
    if input_abs.starts_with(staging) || staging.starts_with(&input_abs) {
        return Err(Error::Config(format!(
            "staging directory {} overlaps the {label} {}",
            staging.display(),
            input.display()
        )));
    }
    Ok(())
}
