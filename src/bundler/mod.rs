//! Installer packaging pipeline.
//!
//! Assembles the Strain++ distribution in a staging directory and compiles
//! it into a Windows installer with Inno Setup.
//!
//! # Module Organization
//!
//! - [`builder`] - [`Bundler`] orchestrator, dependency collection, staging
//! - [`settings`] - [`Settings`], [`SettingsBuilder`], [`DependencyManifest`]
//! - [`platform`] - Inno Setup script rendering and compilation
//! - [`error`] - pipeline error types
//! - [`utils`] - filesystem helpers

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::{BundleReport, Bundler, CollectFailure, CollectReport};
pub use error::{Error, Result};
pub use settings::{
    DependencyCategory, DependencyManifest, InnoSettings, ManifestEntry, Settings,
    SettingsBuilder,
};
