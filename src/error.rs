//! Error types for pkgwatch
//!
//! Library code returns `PkgwatchResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for pkgwatch operations
pub type PkgwatchResult<T> = Result<T, PkgwatchError>;

/// Main error type for pkgwatch operations
#[derive(Error, Debug)]
pub enum PkgwatchError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem watcher backend error
    #[error("watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// Config file could not be parsed or holds an invalid value
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Environment override holds an unusable value
    #[error("invalid value for {var}: {message}")]
    InvalidEnv { var: String, message: String },

    /// Build command resolved to nothing
    #[error("build command is empty")]
    EmptyBuildCommand,

    /// Build command could not be started
    #[error("failed to run build command '{program}': {source}")]
    BuildSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Build command ran and exited unsuccessfully
    #[error("build command failed ({status})")]
    BuildFailed { status: ExitStatus },
}
