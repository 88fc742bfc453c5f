// src/errors.rs

//! Crate-wide error types and aliases.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a descriptor file, before any semantic
/// validation happens.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("app entry {index}: missing required field `{field}`")]
    MissingField { field: &'static str, index: usize },

    #[error("duplicate app name '{name}' (entries {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}

/// Semantic errors for a single descriptor entry.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("app '{app}': path not found: {path:?}")]
    PathNotFound { app: String, path: PathBuf },

    #[error("app '{app}': invalid interpreter {value:?}")]
    InvalidInterpreter { app: String, value: String },
}

#[derive(Error, Debug)]
pub enum LaunchspecError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("app not found: {0}")]
    AppNotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchspecError>;
