//! Common error types for container-panel.
//!
//! This module provides a centralized Error enum using thiserror,
//! with conversions from underlying error types used throughout the crate.

use thiserror::Error;

/// Main error type for container-panel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors from tokio or std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors reported by the container runtime daemon or its client
    #[error("{0}")]
    Docker(#[from] bollard::errors::Error),

    /// Errors raised by a `ContainerRuntime` other than Docker. The crate
    /// itself only builds these from its in-memory test runtime.
    #[error("{0}")]
    Runtime(String),
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
