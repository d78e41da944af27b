//! Error types for rsw
//!
//! Library code returns [`RswError`]; the binary wraps it in `anyhow` at the
//! command boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::UnwatchError;

/// Result type alias for rsw operations
pub type RswResult<T> = Result<T, RswError>;

/// Main error type for rsw operations
#[derive(Error, Debug)]
pub enum RswError {
    /// `rsw.toml` could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The same crate appears twice in `crates`
    #[error("crate '{name}' is configured more than once")]
    DuplicateCrate { name: String },

    /// The host project's package descriptor is not valid JSON
    #[error("malformed package descriptor {path}: {message}")]
    PackageJson { path: PathBuf, message: String },

    /// A crate manifest could not be parsed
    #[error("malformed crate manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// A blocking (startup) build exited unsuccessfully
    #[error("wasm-pack for crate {crate_name} failed ({})", describe_code(.code))]
    BuildFailed {
        crate_name: String,
        code: Option<i32>,
    },

    /// An external program could not be started
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An unwatch glob could not be compiled
    #[error(transparent)]
    Unwatch(#[from] UnwatchError),

    /// The filesystem watcher could not be set up
    #[error("watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
