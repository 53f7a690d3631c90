use ferrous_resolver_domain::ResourceRecord;
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub records: Arc<Vec<ResourceRecord>>,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(records: Arc<Vec<ResourceRecord>>, expires_at: Instant) -> Self {
        Self {
            records,
            expires_at,
        }
    }

    #[inline]
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
