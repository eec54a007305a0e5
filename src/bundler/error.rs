//! Error types for the packaging pipeline.
//!
//! Filesystem failures carry the operation and the offending path so a
//! failed run points straight at the file that was missing.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while staging, rendering or compiling the installer.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// Filesystem operation failed on a specific path
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying IO error
        #[source]
        error: io::Error,
    },

    /// External command could not be started
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Command name
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// Installer compiler ran but reported failure
    #[error("{} exited with {}", compiler.display(), describe_exit(*code))]
    CompilerFailed {
        /// Compiler executable
        compiler: PathBuf,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// No installer compiler configured or found
    #[error("installer compiler not found: {0}")]
    CompilerNotFound(String),

    /// Invalid pipeline configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Directory traversal errors
    #[error("directory walk failed: {0}")]
    Walkdir(#[from] walkdir::Error),

    /// Relative path computation errors
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Message wrapped around an inner error
    #[error("{message}: {source}")]
    Context {
        /// Added message
        message: String,
        /// Inner error
        #[source]
        source: Box<Error>,
    },

    /// Generic error with message
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Exit code of a failed compiler run, looking through context wrappers.
    pub fn compiler_exit_code(&self) -> Option<i32> {
        match self {
            Error::CompilerFailed { code, .. } => *code,
            Error::Context { source, .. } => source.compiler_exit_code(),
            _ => None,
        }
    }
}

/// Attaches an operation and path to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Adds a message to `Option` and `Result` values.
pub trait Context<T> {
    /// Wraps the failure with `message`.
    fn context<C: Display>(self, message: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, message: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(message.to_string()))
    }
}

impl<T> Context<T> for Result<T> {
    fn context<C: Display>(self, message: C) -> Result<T> {
        self.map_err(|source| Error::Context {
            message: message.to_string(),
            source: Box::new(source),
        })
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($($arg)*)).into())
    };
}
