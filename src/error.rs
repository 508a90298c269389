//! Error types.
//!
//! Each concern owns an error enum; [`Error`] wraps them so that `?` works across
//! module boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Configuration loading and validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read configuration file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse toml configuration: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("failed to parse yaml configuration: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Parameter store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to list parameters under {path}: {reason}")]
    List { path: String, reason: String },

    #[error("failed to fetch parameters {names:?}: {reason}")]
    Batch { names: Vec<String>, reason: String },

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("deadline exceeded while {0}")]
    Timeout(String),
}

/// Process handoff failures.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("no command specified")]
    NoCommand,

    #[error("command not found: {command} ({reason})")]
    NotFound { command: String, reason: String },

    #[error("failed to execute {command}: {source}")]
    Failed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
