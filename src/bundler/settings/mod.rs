//! Configuration structures for a packaging run.
//!
//! This module provides the dependency manifest, installer settings and the
//! builder that assembles them into [`Settings`].

mod builder;
mod core;
mod manifest;
mod windows;

pub use builder::{DEFAULT_STAGING_SUBDIR, SettingsBuilder};
pub use core::{DIST_SUBDIR, Settings};
pub use manifest::{DependencyCategory, DependencyManifest, LIBRARY_EXTENSION, ManifestEntry};
pub use windows::{
    DEFAULT_RESOURCES_SUBDIR, DEFAULT_SCRIPT_NAME, DEFAULT_TEMPLATE_NAME,
    DEFAULT_VERSION_PLACEHOLDER, InnoSettings,
};
