//! Packaging orchestration and its stages.
//!
//! - [`orchestrator`] - main [`Bundler`] struct running the pipeline
//! - [`collector`] - best-effort dependency collection
//! - [`staging`] - staging directory lifecycle

mod collector;
mod orchestrator;
mod staging;

pub use collector::{CollectFailure, CollectReport, collect_dependencies};
pub use orchestrator::{BundleReport, Bundler};
pub use staging::StagingDir;
