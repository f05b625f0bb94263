//! Read-through rate coordination.

use std::sync::Arc;
use std::time::Duration;

use fxrelay_cache::SharedCacheStore;
use fxrelay_common::{Conversion, Directory, RateQuote};
use fxrelay_provider::{OriginResult, RateProvider};
use tracing::{debug, instrument, warn};

use crate::keys::{rate_key, CURRENCIES_KEY};

/// How long fetched values stay servable from cache.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Mediates between the cache store and the origin provider.
///
/// Every call runs lookup, fetch and store to completion before returning;
/// no state persists across calls. Caching is an optimization: a cache
/// that misbehaves degrades a call into an origin fetch, it never fails
/// one. Only origin failures reach the caller.
pub struct RateService {
    cache: SharedCacheStore,
    provider: Arc<dyn RateProvider>,
    ttl: Duration,
}

impl RateService {
    /// Create a service with the default one-hour TTL.
    pub fn new(cache: SharedCacheStore, provider: Arc<dyn RateProvider>) -> Self {
        Self {
            cache,
            provider,
            ttl: DEFAULT_TTL,
        }
    }

    /// Override how long fetched values stay cached.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Get the exchange rate for one unit of `from` in units of `to`.
    ///
    /// Currency codes are matched against the cache exactly as supplied;
    /// no normalization happens at this layer.
    #[instrument(skip(self))]
    pub async fn get_rate(&self, from: &str, to: &str) -> OriginResult<RateQuote> {
        let key = rate_key(from, to);

        if let Some(raw) = self.cache_lookup(&key).await {
            match raw.parse::<f64>() {
                Ok(rate) if rate.is_finite() => {
                    debug!(%key, rate, "serving cached rate");
                    return Ok(RateQuote::now(from, to, rate));
                }
                _ => debug!(%key, "cached rate undecodable, treating as miss"),
            }
        }

        let rate = self.provider.fetch_rate(from, to).await?;
        self.cache_store(&key, &format!("{rate:.6}")).await;

        Ok(RateQuote::now(from, to, rate))
    }

    /// Convert `amount` units of `from` into `to` at the current rate.
    ///
    /// The amount is accepted as given: negative and zero amounts pass
    /// through the multiplication unchanged.
    #[instrument(skip(self))]
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> OriginResult<Conversion> {
        let quote = self.get_rate(from, to).await?;
        Ok(Conversion::price(&quote, amount))
    }

    /// List all currencies known to the origin provider.
    ///
    /// The directory is fetched and cached as a whole; there is no
    /// incremental refresh.
    #[instrument(skip(self))]
    pub async fn list_currencies(&self) -> OriginResult<Directory> {
        if let Some(raw) = self.cache_lookup(CURRENCIES_KEY).await {
            match serde_json::from_str::<Directory>(&raw) {
                Ok(currencies) => {
                    debug!(count = currencies.len(), "serving cached directory");
                    return Ok(currencies);
                }
                Err(error) => {
                    debug!(%error, "cached directory undecodable, treating as miss");
                }
            }
        }

        let currencies = self.provider.fetch_currencies().await?;
        match serde_json::to_string(&currencies) {
            Ok(payload) => self.cache_store(CURRENCIES_KEY, &payload).await,
            Err(error) => warn!(%error, "directory not serializable, skipping cache write"),
        }

        Ok(currencies)
    }

    /// Cache lookup where every store failure counts as a miss.
    async fn cache_lookup(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "cache read failed, falling through to origin");
                None
            }
        }
    }

    /// Best-effort cache write. The freshly fetched value is served whether
    /// or not it could be stored.
    async fn cache_store(&self, key: &str, value: &str) {
        if let Err(error) = self.cache.set(key, value, self.ttl).await {
            warn!(key, %error, "cache write failed, serving origin value uncached");
        }
    }
}
