//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Strain++ Windows installer packager
#[derive(Parser, Debug)]
#[command(
    name = "strainpp_installer",
    version,
    about = "Stages Strain++ and its Qt runtime, then compiles the Inno Setup installer",
    long_about = "Collects the Strain++ executable and its MinGW/Qt runtime libraries into a staging directory,
renders the Inno Setup script with the version from the build's version.cpp and runs ISCC on it.

Usage:
  strainpp_installer --toolchain D:\\msys64\\mingw64 --build-dir D:\\strainpp\\cmake-build-release
  strainpp_installer --config packaging.toml --no-compile
  strainpp_installer --build-dir ./cmake-build-release --print-version

The staging directory (default <resources>/temp) is deleted at the start of every run."
)]
pub struct Args {
    /// MinGW toolchain root containing bin/ and share/qt5/plugins/
    #[arg(long, env = "STRAINPP_TOOLCHAIN", value_name = "DIR")]
    pub toolchain: Option<PathBuf>,

    /// Build output root containing the executable and src/version.cpp
    #[arg(short = 'b', long, env = "STRAINPP_BUILD_DIR", value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Path to ISCC.exe (default: ISCC on PATH, then the Inno Setup 6 install location)
    #[arg(long, env = "STRAINPP_ISCC", value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Directory with inno_installer_script.iss and installer_files/ (default: .)
    #[arg(short = 'r', long, env = "STRAINPP_INSTALLER_RESOURCES", value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Staging directory, wiped on every run (default: <resources>/temp)
    #[arg(short = 's', long, value_name = "DIR")]
    pub staging: Option<PathBuf>,

    /// Version metadata file (default: <build-dir>/src/version.cpp)
    #[arg(long, value_name = "PATH")]
    pub version_file: Option<PathBuf>,

    /// Additional file copied into the distribution root (repeatable)
    #[arg(short = 'e', long = "extra-file", value_name = "PATH")]
    pub extra_files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Remove the staging directory if the run fails
    #[arg(long)]
    pub clean_on_failure: bool,

    /// Stage files and render the script without running ISCC
    #[arg(long)]
    pub no_compile: bool,

    /// Print the resolved version string and exit
    #[arg(long)]
    pub print_version: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.print_version && self.no_compile {
            return Err("--print-version and --no-compile cannot be combined".to_string());
        }

        for path in self.extra_files.iter() {
            if path.as_os_str().is_empty() {
                return Err("--extra-file cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths_and_repeated_extras() {
        let args = Args::try_parse_from([
            "strainpp_installer",
            "--toolchain",
            "/mingw64",
            "--build-dir",
            "/build",
            "-e",
            "/libs/qcustomplot2.dll",
            "-e",
            "/libs/other.dll",
            "--no-compile",
        ])
        .unwrap();

        assert_eq!(args.toolchain, Some(PathBuf::from("/mingw64")));
        assert_eq!(args.extra_files.len(), 2);
        assert!(args.no_compile);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn print_version_conflicts_with_no_compile() {
        let args = Args::try_parse_from([
            "strainpp_installer",
            "--print-version",
            "--no-compile",
        ])
        .unwrap();
        assert!(args.validate().is_err());
    }
}
