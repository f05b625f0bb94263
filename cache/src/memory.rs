//! In-process cache store with TTL support.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::error::CacheResult;
use crate::store::CacheStore;

/// Stored entry.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Thread-safe in-process store.
///
/// Backs tests and single-process deployments. Entries live purely in
/// memory and expire lazily on lookup; this store never reports
/// `Unavailable`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of entries physically present, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries past their expiration instant.
    pub fn evict_expired(&self) {
        self.entries.retain(|_, entry| entry.is_valid());
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_valid() {
                debug!(key, "cache hit");
                return Ok(Some(entry.value.clone()));
            }
            debug!(key, "cache entry expired");
            drop(entry);
            self.entries.remove(key);
        }

        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.entries
            .insert(key.to_string(), Entry::new(value.to_string(), ttl));
        Ok(())
    }
}
