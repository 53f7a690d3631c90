use ferrous_resolver_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{DnsResolution, DnsResolver};

pub struct ResolveQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Validates `domain` and resolves it. Malformed names fail here without
    /// touching the network.
    #[instrument(skip(self), fields(record_type = %record_type))]
    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResolution, DomainError> {
        let query = DnsQuery::parse(domain, record_type)?;

        if let Some(hit) = self.resolver.try_cache(&query) {
            debug!(domain = %query.domain, "Answered from cache");
            return Ok(hit);
        }

        let resolution = self.resolver.resolve(&query).await?;

        debug!(
            domain = %query.domain,
            records = resolution.records.len(),
            cache_hit = resolution.cache_hit,
            "Resolution finished"
        );

        Ok(resolution)
    }
}
