//! Origin provider error types.

use thiserror::Error;

/// Errors from the origin rate provider.
///
/// Callers treat both variants the same way: the origin could not supply a
/// usable answer for this request. No retry is attempted and no fallback
/// value is invented.
#[derive(Debug, Error)]
pub enum OriginError {
    /// The provider could not be reached, or answered with an error status.
    #[error("origin request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered, but the body did not decode to a usable value.
    #[error("malformed origin response: {0}")]
    Malformed(String),
}

/// Result type for origin provider operations.
pub type OriginResult<T> = Result<T, OriginError>;
