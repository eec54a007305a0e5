//! Inno Setup installer settings.

use std::path::PathBuf;

/// Default name of the installer-definition template in the resources root.
pub const DEFAULT_TEMPLATE_NAME: &str = "inno_installer_script.iss";

/// Default name of the rendered script inside the staging directory.
pub const DEFAULT_SCRIPT_NAME: &str = "strainpp.iss";

/// Default placeholder replaced with the version string.
pub const DEFAULT_VERSION_PLACEHOLDER: &str = ";version_string;";

/// Default name of the static resource directory (icons, license text).
pub const DEFAULT_RESOURCES_SUBDIR: &str = "installer_files";

/// Inno Setup installer configuration.
///
/// # Configuration
///
/// ```toml
/// [paths]
/// compiler = 'C:\Program Files (x86)\Inno Setup 6\ISCC.exe'
/// ```
#[derive(Clone, Debug)]
pub struct InnoSettings {
    /// Path to `ISCC.exe`.
    ///
    /// Default: None (located on `PATH`, then the standard install location)
    pub compiler: Option<PathBuf>,

    /// Template file name, relative to the resources root.
    pub template_name: String,

    /// Rendered script file name, relative to the staging directory.
    pub script_name: String,

    /// Literal token substituted with the version string.
    pub version_placeholder: String,

    /// Static resource directory name, relative to the resources root.
    ///
    /// Copied under the same name into the staging directory.
    pub resources_subdir: String,
}

impl Default for InnoSettings {
    fn default() -> Self {
        Self {
            compiler: None,
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            script_name: DEFAULT_SCRIPT_NAME.to_string(),
            version_placeholder: DEFAULT_VERSION_PLACEHOLDER.to_string(),
            resources_subdir: DEFAULT_RESOURCES_SUBDIR.to_string(),
        }
    }
}
