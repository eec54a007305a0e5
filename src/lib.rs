//! Windows installer packaging for Strain++.
//!
//! This library provides the packaging pipeline:
//! - dependency collection into a staging directory
//! - version resolution from the generated `version.cpp`
//! - Inno Setup script rendering and compilation
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
