//! Staging directory lifecycle.

use crate::bundler::{error::Result, utils::fs};
use std::path::{Path, PathBuf};

/// Exclusive handle on the staging directory for one run.
///
/// [`StagingDir::prepare`] wipes and recreates the directory. If the guard is
/// dropped without [`StagingDir::finish`] and cleanup was requested, the
/// partially built tree is removed again.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
    clean_on_drop: bool,
}

impl StagingDir {
    /// Deletes any previous content at `path` and creates it empty.
    pub async fn prepare(path: &Path, clean_on_failure: bool) -> Result<Self> {
        if path.exists() {
            log::info!("Removing previous staging directory {}", path.display());
        }
        fs::create_dir_all(path, true).await?;

        Ok(Self {
            path: path.to_path_buf(),
            clean_on_drop: clean_on_failure,
        })
    }

    /// Path of the staging directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Marks the run as successful; the directory is kept.
    pub fn finish(mut self) -> PathBuf {
        self.clean_on_drop = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if !self.clean_on_drop {
            return;
        }
        log::info!("Removing staging directory {} after failure", self.path.display());
        // Blocking remove: drop cannot await, and the run is ending anyway.
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to remove {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepare_discards_stale_content() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = tmp.path().join("temp");
        std::fs::create_dir_all(staging.join("dist_files")).unwrap();
        std::fs::write(staging.join("dist_files/old.dll"), "stale").unwrap();

        let guard = StagingDir::prepare(&staging, false).await.unwrap();

        assert!(guard.path().is_dir());
        assert!(!staging.join("dist_files").exists());
    }

    #[tokio::test]
    async fn dropped_guard_cleans_when_requested() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = tmp.path().join("temp");

        {
            let guard = StagingDir::prepare(&staging, true).await.unwrap();
            std::fs::write(guard.path().join("partial.iss"), "x").unwrap();
        }

        assert!(!staging.exists());
    }

    #[tokio::test]
    async fn finished_guard_keeps_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = tmp.path().join("temp");

        let guard = StagingDir::prepare(&staging, true).await.unwrap();
        let kept = guard.finish();

        assert_eq!(kept, staging);
        assert!(staging.is_dir());
    }

    #[tokio::test]
    async fn dropped_guard_keeps_directory_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        let staging = tmp.path().join("temp");

        drop(StagingDir::prepare(&staging, false).await.unwrap());

        assert!(staging.is_dir());
    }
}
