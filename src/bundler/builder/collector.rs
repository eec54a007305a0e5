//! Dependency collection into the distribution folder.
//!
//! Collection is best-effort: a missing library is recorded and logged, and
//! the remaining entries are still copied.

use crate::bundler::{
    error::Result,
    settings::{DependencyCategory, DependencyManifest},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// A manifest entry that could not be copied.
#[derive(Debug, Clone)]
pub struct CollectFailure {
    /// Source path that was attempted.
    pub source: PathBuf,
    /// Reason the copy failed.
    pub reason: String,
}

/// Outcome of a collection pass.
#[derive(Debug, Clone, Default)]
pub struct CollectReport {
    /// Paths of the copies inside the distribution folder.
    pub copied: Vec<PathBuf>,
    /// Entries that were skipped.
    pub failures: Vec<CollectFailure>,
}

impl CollectReport {
    /// True when every manifest entry was copied.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copies every manifest entry into `dist_dir`.
///
/// Category subfolders are created up front, so they exist even when all of
/// their libraries are missing. Only a failure to create the folders
/// themselves aborts the pass.
pub async fn collect_dependencies(
    manifest: &DependencyManifest,
    toolchain_dir: &Path,
    build_dir: &Path,
    dist_dir: &Path,
) -> Result<CollectReport> {
    for category in DependencyCategory::ALL {
        if !manifest.names(category).is_empty() {
            fs::create_dir_all(&category.dest_dir(dist_dir), false).await?;
        }
    }
    fs::create_dir_all(dist_dir, false).await?;

    let mut report = CollectReport::default();

    for entry in manifest.entries(toolchain_dir, build_dir, dist_dir) {
        match fs::copy_file_into(&entry.source, &entry.dest_dir).await {
            Ok(copied) => {
                log::debug!("Copied {} -> {}", entry.source.display(), copied.display());
                report.copied.push(copied);
            }
            Err(e) => {
                log::warn!("Skipping dependency {}: {}", entry.source.display(), e);
                report.failures.push(CollectFailure {
                    source: entry.source,
                    reason: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Collected {} of {} dependencies into {}",
        report.copied.len(),
        manifest.file_count(),
        dist_dir.display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
    }

    fn small_manifest() -> DependencyManifest {
        DependencyManifest {
            runtime: vec!["zlib1".into(), "Qt5Core".into(), "libgomp-1".into()],
            image_formats: vec!["qtiff".into()],
            styles: vec!["qwindowsvistastyle".into()],
            platforms: vec!["qminimal".into(), "qwindows".into()],
            executable: PathBuf::from("strainpp.exe"),
            extra_files: vec![],
        }
    }

    fn populate(toolchain: &Path, build: &Path, manifest: &DependencyManifest) {
        for entry in manifest.entries(toolchain, build, Path::new("unused")) {
            touch(&entry.source);
        }
    }

    #[tokio::test]
    async fn one_missing_library_does_not_stop_collection() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = tmp.path().join("mingw64");
        let build = tmp.path().join("build");
        let dist = tmp.path().join("temp/dist_files");
        let manifest = small_manifest();
        populate(&toolchain, &build, &manifest);
        std::fs::remove_file(toolchain.join("bin/Qt5Core.dll")).unwrap();

        let report = collect_dependencies(&manifest, &toolchain, &build, &dist)
            .await
            .unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].source, toolchain.join("bin").join("Qt5Core.dll"));
        assert_eq!(report.copied.len(), manifest.file_count() - 1);
        assert!(dist.join("zlib1.dll").is_file());
        assert!(dist.join("libgomp-1.dll").is_file());
        assert!(dist.join("strainpp.exe").is_file());
        assert!(!dist.join("Qt5Core.dll").exists());
    }

    #[tokio::test]
    async fn plugins_land_in_category_folders() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = tmp.path().join("mingw64");
        let build = tmp.path().join("build");
        let dist = tmp.path().join("temp/dist_files");
        let manifest = small_manifest();
        populate(&toolchain, &build, &manifest);

        let report = collect_dependencies(&manifest, &toolchain, &build, &dist)
            .await
            .unwrap();

        assert!(report.is_complete());
        assert!(dist.join("imageformats/qtiff.dll").is_file());
        assert!(dist.join("styles/qwindowsvistastyle.dll").is_file());
        assert!(dist.join("platforms/qminimal.dll").is_file());
        assert!(dist.join("platforms/qwindows.dll").is_file());
        assert!(!dist.join("qtiff.dll").exists());
        assert!(!dist.join("qwindows.dll").exists());
    }

    #[tokio::test]
    async fn extra_files_are_copied_to_root() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = tmp.path().join("mingw64");
        let build = tmp.path().join("build");
        let dist = tmp.path().join("temp/dist_files");
        let plot_lib = tmp.path().join("qcustomplot/lib/qcustomplot2.dll");
        touch(&plot_lib);
        let manifest = DependencyManifest {
            extra_files: vec![plot_lib],
            ..small_manifest()
        };
        populate(&toolchain, &build, &manifest);

        let report = collect_dependencies(&manifest, &toolchain, &build, &dist)
            .await
            .unwrap();

        assert!(report.is_complete());
        assert!(dist.join("qcustomplot2.dll").is_file());
    }

    #[tokio::test]
    async fn empty_toolchain_reports_every_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist_files");
        let manifest = small_manifest();

        let report = collect_dependencies(
            &manifest,
            &tmp.path().join("mingw64"),
            &tmp.path().join("build"),
            &dist,
        )
        .await
        .unwrap();

        assert!(report.copied.is_empty());
        assert_eq!(report.failures.len(), manifest.file_count());
        assert!(dist.join("platforms").is_dir());
    }
}
