//! Error types for changelogup

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a changelog run.
///
/// Nothing here is retried or recovered internally; every variant reaches
/// the caller with the stage and input that failed.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed run configuration, caught before any network call
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Token rejected by the GitHub API, or missing a required scope
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Repository does not resolve (or is not visible to the token)
    #[error("repository not found: {0}")]
    NotFound(String),

    /// The API signalled quota exhaustion
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    /// Transport-level failure talking to the API
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected commit schema
    #[error("unexpected GitHub payload: {0}")]
    Schema(String),

    /// The API answered with a status outside the documented set
    #[error("unexpected GitHub response: {0}")]
    Api(String),

    /// Writing the rendered changelog failed
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        /// Output path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
