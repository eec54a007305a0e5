//! Inno Setup script rendering.
//!
//! The template is an ordinary `.iss` file with a literal version token.
//! Rendering substitutes the token and changes nothing else.

use crate::bundler::{
    error::{ErrorExt, Result},
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Replaces every occurrence of `placeholder` in `template` with `version`.
///
/// No escaping is applied; the version is inserted verbatim.
pub fn render_script(template: &str, placeholder: &str, version: &str) -> String {
    let occurrences = template.matches(placeholder).count();
    if occurrences != 1 {
        log::warn!(
            "Installer template contains {} occurrences of {:?}, expected exactly one",
            occurrences,
            placeholder
        );
    }
    template.replace(placeholder, version)
}

/// Renders the template at `template_path` into `output_path`.
pub async fn write_script(
    template_path: &Path,
    output_path: &Path,
    placeholder: &str,
    version: &str,
) -> Result<PathBuf> {
    let template = tokio::fs::read_to_string(template_path)
        .await
        .fs_context("reading installer template", template_path)?;

    let script = render_script(&template, placeholder, version);

    tokio::fs::write(output_path, script)
        .await
        .fs_context("writing installer script", output_path)?;

    log::info!("Rendered installer script {}", output_path.display());
    Ok(output_path.to_path_buf())
}

/// Copies the static installer resources into the staging directory.
pub async fn stage_resources(settings: &Settings) -> Result<PathBuf> {
    let from = settings.resources_source_dir();
    let to = settings.resources_staged_dir();
    fs::copy_dir(&from, &to).await?;
    log::info!("Copied installer resources {} -> {}", from.display(), to.display());
    Ok(to)
}

/// Renders the installer script for `settings` with `version`.
pub async fn generate_script(settings: &Settings, version: &str) -> Result<PathBuf> {
    write_script(
        &settings.template_path(),
        &settings.script_path(),
        &settings.inno().version_placeholder,
        version,
    )
    .await
}
