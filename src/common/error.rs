//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Malformed page references are not errors: the engine skips them.
/// Everything here is a caller contract violation or an export failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The frame count was zero or negative.
    ///
    /// No partial result is computed when this is returned.
    #[error("Invalid frame count {0}: must be at least 1")]
    InvalidCapacity(i64),

    /// A policy name did not match `fifo`, `lru` or `optimal`.
    #[error("Unknown policy '{0}' (expected fifo, lru or optimal)")]
    UnknownPolicy(String),

    /// A reference producer was given unusable parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
