//! Server startup errors.

use thiserror::Error;

/// Invalid value in the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean flag, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read leptos options: {0}")]
    Leptos(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
