//! Server error types.

use thiserror::Error;

/// Errors raised while starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Other socket I/O.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The global metrics recorder could not be installed.
    #[error("metrics recorder: {0}")]
    Metrics(String),
}
