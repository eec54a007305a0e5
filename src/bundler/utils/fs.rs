//! File system utilities for staging.
//!
//! Provides file and directory copies with automatic directory creation
//! and path-carrying errors.

use crate::bundler::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Copies a regular file into `dest_dir`, keeping its file name.
///
/// Creates `dest_dir` if needed. Returns the path of the copy.
pub async fn copy_file_into(from: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = from
        .file_name()
        .ok_or_else(|| Error::GenericError(format!("{from:?} has no file name")))?;
    let to = dest_dir.join(file_name);
    copy_file(from, &to).await?;
    Ok(to)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading source file", from)?;
    if !metadata.is_file() {
        crate::bail!("{from:?} is not a file");
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Fails if the source path is not a directory or doesn't exist, or if the
/// destination lies inside the source.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading source directory", from)?;
    if !metadata.is_dir() {
        crate::bail!("{from:?} is not a Directory");
    }

    let from_abs = from.absolutize().fs_context("resolving source directory", from)?;
    let to_abs = to.absolutize().fs_context("resolving destination directory", to)?;
    if to_abs.starts_with(&from_abs) {
        crate::bail!("cannot copy {from:?} into its own subtree {to:?}");
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<()> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
        }

        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
            } else {
                // Symlinks are followed so the staged tree is self-contained
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file", entry.path())?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}
