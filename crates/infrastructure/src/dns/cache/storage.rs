use super::{CacheEntry, CacheKey, CacheMetrics, CacheMetricsSnapshot};
use dashmap::DashMap;
use ferrous_resolver_application::ports::DnsCachePort;
use ferrous_resolver_domain::config::CacheConfig;
use ferrous_resolver_domain::ResourceRecord;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// In-memory answer cache. Entries expire `min(ttl, max_ttl)` seconds after
/// they are stored and are removed lazily on the next lookup.
pub struct TtlCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    default_ttl: u32,
    max_ttl: u32,
    metrics: CacheMetrics,
}

impl TtlCache {
    pub fn new(default_ttl: u32, max_ttl: u32) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            default_ttl,
            max_ttl,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl, config.max_ttl)
    }

    pub fn lookup(&self, key: &CacheKey) -> Option<Arc<Vec<ResourceRecord>>> {
        let now = Instant::now();

        let live = self
            .entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| Arc::clone(&entry.records));

        if let Some(records) = live {
            self.metrics.record_hit();
            return Some(records);
        }

        if self
            .entries
            .remove_if(key, |_, entry| !entry.is_live(now))
            .is_some()
        {
            self.metrics.record_expiration();
            debug!(key = %key, "Evicted expired cache entry");
        }
        self.metrics.record_miss();
        None
    }

    /// Stores `records` under `key`, replacing any previous entry. Returns the
    /// TTL actually applied.
    pub fn store(&self, key: CacheKey, records: Arc<Vec<ResourceRecord>>, min_ttl: u32) -> u32 {
        let ttl = min_ttl.min(self.max_ttl);
        let expires_at = Instant::now() + Duration::from_secs(u64::from(ttl));

        debug!(key = %key, ttl, records = records.len(), "Cached answer set");

        self.entries.insert(key, CacheEntry::new(records, expires_at));
        self.metrics.record_insertion();
        ttl
    }

    /// Stores an answer set for the smallest TTL among its records, or the
    /// default TTL when it is empty.
    pub fn store_answers(&self, key: CacheKey, records: Arc<Vec<ResourceRecord>>) -> u32 {
        let min_ttl = records
            .iter()
            .map(|r| r.ttl)
            .min()
            .unwrap_or(self.default_ttl);
        self.store(key, records, min_ttl)
    }

    pub fn clear(&self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl DnsCachePort for TtlCache {
    fn clear(&self) -> usize {
        TtlCache::clear(self)
    }

    fn cache_size(&self) -> usize {
        self.len()
    }
}
