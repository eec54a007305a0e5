//! Command line interface for the installer packager.
//!
//! This module parses arguments, merges them with the config file and runs
//! the packaging pipeline.

mod args;
mod config;

pub use args::Args;
pub use config::{PackagingConfig, PathsConfig, build_settings};

use crate::{
    bundler::{BundleReport, Bundler},
    error::{CliError, Result},
    metadata,
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs the command described by `args`.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    if args.print_version {
        let path = config::version_file(args)?;
        let version = metadata::resolve_version(&path).await?;
        println!("{version}");
        return Ok(0);
    }

    let settings = build_settings(args)?;
    let report = Bundler::new(settings).bundle().await?;
    print_summary(&report);

    Ok(0)
}

fn print_summary(report: &BundleReport) {
    println!("Version:  {}", report.version);
    println!("Staging:  {}", report.staging_dir.display());
    println!("Script:   {}", report.script_path.display());
    println!(
        "Collected {} files, {} missing",
        report.collected.copied.len(),
        report.collected.failures.len()
    );
    for failure in &report.collected.failures {
        println!("  missing: {} ({})", failure.source.display(), failure.reason);
    }
    if report.compiler_output.is_some() {
        println!("Installer compiled");
    }
}
