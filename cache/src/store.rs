//! Cache store trait.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::CacheResult;

/// Key/value store with per-entry expiration.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up `key`.
    ///
    /// Returns `Ok(None)` for a key that is absent or past its expiration
    /// instant; an entry past its expiry must never surface as a hit, even
    /// if it is physically still stored. `CacheError::Unavailable` is
    /// reserved for infrastructure failure.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store `value` under `key` with an absolute expiry of now + `ttl`,
    /// overwriting any existing entry.
    ///
    /// Either the whole value is stored with its TTL, or the store is left
    /// unchanged.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;
}

/// Shared cache store handle.
pub type SharedCacheStore = Arc<dyn CacheStore>;
