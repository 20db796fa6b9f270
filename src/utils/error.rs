//! The `error` module defines the error types surfaced during startup.
//!
//! Errors inside a running relay are handled where they occur (a failed
//! delivery is dropped and logged, a broken socket deregisters its
//! connection); only configuration and bind failures propagate out.

use thiserror::Error;

/// Errors that can prevent the relay from starting.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}
