//! Top-level error types for the command line tool.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type returned by [`crate::cli::run`]
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Packaging pipeline errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}

impl BundlerError {
    /// Process exit code for this error.
    ///
    /// A failed installer compiler passes its own exit code through; every
    /// other failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::Bundler(e) => e.compiler_exit_code().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }

    /// Captured compiler output to show alongside the error, if any.
    pub fn compiler_output(&self) -> Option<(&str, &str)> {
        let BundlerError::Bundler(e) = self else {
            return None;
        };
        let mut e = e;
        loop {
            match e {
                crate::bundler::Error::CompilerFailed { stdout, stderr, .. } => {
                    return Some((stdout.as_str(), stderr.as_str()));
                }
                crate::bundler::Error::Context { source, .. } => e = source.as_ref(),
                _ => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Error;
    use std::path::PathBuf;

    fn compiler_failed(code: Option<i32>) -> Error {
        Error::Context {
            message: "compiling installer".into(),
            source: Box::new(Error::CompilerFailed {
                compiler: PathBuf::from("ISCC.exe"),
                code,
                stdout: "Compile aborted.".into(),
                stderr: String::new(),
            }),
        }
    }

    #[test]
    fn compiler_exit_code_is_passed_through() {
        let err = BundlerError::from(compiler_failed(Some(2)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.compiler_output(), Some(("Compile aborted.", "")));
    }

    #[test]
    fn signal_termination_exits_with_one() {
        assert_eq!(BundlerError::from(compiler_failed(None)).exit_code(), 1);
    }

    #[test]
    fn other_errors_exit_with_one() {
        let err = BundlerError::from(CliError::MissingArgument {
            argument: "--toolchain".into(),
        });
        assert_eq!(err.exit_code(), 1);
        assert!(err.compiler_output().is_none());
    }
}
