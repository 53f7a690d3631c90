use async_trait::async_trait;
use ferrous_resolver_domain::{DnsQuery, DomainError, ResourceRecord};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsResolution {
    pub records: Arc<Vec<ResourceRecord>>,
    pub cache_hit: bool,
    /// Nameserver that produced the answer; `None` for cache hits.
    pub nameserver: Option<Arc<str>>,
    pub min_ttl: Option<u32>,
}

impl DnsResolution {
    pub fn new(records: Vec<ResourceRecord>, cache_hit: bool) -> Self {
        let min_ttl = records.iter().map(|r| r.ttl).min();
        Self {
            records: Arc::new(records),
            cache_hit,
            nameserver: None,
            min_ttl,
        }
    }

    pub fn from_cache(records: Arc<Vec<ResourceRecord>>) -> Self {
        let min_ttl = records.iter().map(|r| r.ttl).min();
        Self {
            records,
            cache_hit: true,
            nameserver: None,
            min_ttl,
        }
    }

    pub fn with_nameserver(mut self, nameserver: impl Into<Arc<str>>) -> Self {
        self.nameserver = Some(nameserver.into());
        self
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;

    fn try_cache(&self, _query: &DnsQuery) -> Option<DnsResolution> {
        None
    }
}
