//! Redis-backed cache store.

use std::time::Duration;

use ::redis::AsyncCommands;
use async_trait::async_trait;
use tracing::debug;

use crate::error::{CacheError, CacheResult};
use crate::store::CacheStore;

/// Cache store backed by a Redis server.
///
/// Construction only parses the URL; no connection is established until
/// the first operation, so a cache that is down never prevents process
/// startup. A cache that is down mid-flight surfaces as
/// `CacheError::Unavailable` on the affected call and nothing else.
pub struct RedisStore {
    client: ::redis::Client,
}

impl RedisStore {
    /// Create a store for the Redis instance at `url`
    /// (e.g. `redis://127.0.0.1:6379`).
    pub fn connect(url: &str) -> CacheResult<Self> {
        let client =
            ::redis::Client::open(url).map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(Self { client })
    }

    async fn connection(&self) -> CacheResult<::redis::aio::MultiplexedConnection> {
        // TODO: keep one multiplexed connection across calls; needs lazy
        // establishment so a down cache cannot block startup.
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        debug!(key, hit = value.is_some(), "redis get");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        // SET EX takes a positive integer number of seconds.
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        debug!(key, seconds, "redis set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_url() {
        assert!(RedisStore::connect("not a redis url").is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        // Reserved port with nothing listening.
        let store = RedisStore::connect("redis://127.0.0.1:1").unwrap();

        let result = store.get("rate:USD:EUR").await;
        assert!(matches!(result, Err(CacheError::Unavailable(_))));
    }
}
