//! Cache store error types.

use thiserror::Error;

/// Errors that can occur against the cache store.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store could not be reached or refused the operation.
    ///
    /// Distinct from a plain miss so callers can tell "not found" apart
    /// from an infrastructure problem.
    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for cache store operations.
pub type CacheResult<T> = Result<T, CacheError>;
