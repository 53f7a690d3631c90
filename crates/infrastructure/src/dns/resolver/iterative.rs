use super::exchange::{NameserverExchange, NameserverReply};
use super::referral::{classify, Classification};
use crate::dns::cache::{CacheKey, TtlCache};
use async_trait::async_trait;
use ferrous_resolver_application::ports::{DnsResolution, DnsResolver};
use ferrous_resolver_domain::{DnsQuery, DomainError, RecordType};
use std::future::Future;
use std::net::Ipv4Addr;
use std::pin::Pin;
use std::sync::Arc;

/// Step events go out at INFO when tracing was requested, DEBUG otherwise.
macro_rules! step {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::info!($($arg)+);
        } else {
            tracing::debug!($($arg)+);
        }
    };
}

type ResolveFuture<'a> =
    Pin<Box<dyn Future<Output = Result<DnsResolution, DomainError>> + Send + 'a>>;

/// Resolves names by walking the delegation tree from the root servers.
pub struct IterativeResolver {
    exchange: NameserverExchange,
    cache: Arc<TtlCache>,
    root_servers: Arc<[Ipv4Addr]>,
    max_delegation_steps: usize,
    max_glue_depth: usize,
    trace_steps: bool,
}

impl IterativeResolver {
    pub(crate) fn new(
        exchange: NameserverExchange,
        cache: Arc<TtlCache>,
        root_servers: Arc<[Ipv4Addr]>,
        max_delegation_steps: usize,
        max_glue_depth: usize,
        trace_steps: bool,
    ) -> Self {
        Self {
            exchange,
            cache,
            root_servers,
            max_delegation_steps,
            max_glue_depth,
            trace_steps,
        }
    }

    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    pub async fn resolve_name(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResolution, DomainError> {
        self.resolve_at_depth(domain, record_type, 0).await
    }

    fn resolve_at_depth<'a>(
        &'a self,
        domain: &'a str,
        record_type: RecordType,
        glue_depth: usize,
    ) -> ResolveFuture<'a> {
        Box::pin(async move {
            let key = CacheKey::new(domain, record_type);
            if let Some(records) = self.cache.lookup(&key) {
                step!(self.trace_steps, key = %key, "Cache hit");
                return Ok(DnsResolution::from_cache(records));
            }

            let (mut nameserver, first_reply) = self.select_root(domain, record_type).await?;
            let mut pending = Some(first_reply);

            for _ in 0..self.max_delegation_steps {
                let reply = match pending.take() {
                    Some(reply) => reply,
                    None => {
                        step!(
                            self.trace_steps,
                            nameserver = %nameserver,
                            domain,
                            record_type = %record_type,
                            "Querying nameserver"
                        );
                        self.exchange.query(nameserver, domain, record_type).await?
                    }
                };

                if reply.is_empty() {
                    if reply.is_nxdomain() {
                        return Err(DomainError::NxDomain);
                    }
                    return Err(DomainError::NoResponse {
                        server: nameserver.to_string(),
                    });
                }

                let referral = match classify(&reply.records, domain, record_type) {
                    Classification::Answer(answers) => {
                        let records = Arc::new(answers);
                        let ttl = self.cache.store_answers(key, Arc::clone(&records));
                        step!(
                            self.trace_steps,
                            nameserver = %nameserver,
                            domain,
                            answers = records.len(),
                            ttl,
                            "Answer received"
                        );
                        let resolution = DnsResolution {
                            records,
                            cache_hit: false,
                            nameserver: None,
                            min_ttl: Some(ttl),
                        };
                        return Ok(resolution.with_nameserver(nameserver.to_string()));
                    }
                    Classification::NoData => return Err(DomainError::NxDomain),
                    Classification::Referral(referral) => referral,
                };

                if let Some((ns_name, ip)) = referral.next_hop() {
                    step!(
                        self.trace_steps,
                        from = %nameserver,
                        to = %ip,
                        nameserver_name = ns_name,
                        "Following referral"
                    );
                    nameserver = ip;
                    continue;
                }

                let Some(ns_name) = referral.first_nameserver() else {
                    return Err(DomainError::NxDomain);
                };
                nameserver = self.resolve_glue(ns_name, glue_depth + 1).await?;
            }

            Err(DomainError::DelegationLoop {
                steps: self.max_delegation_steps,
            })
        })
    }

    /// Looks up the address of a nameserver the referral named without glue.
    ///
    /// A nameserver name that does not exist makes the delegation lame, not
    /// the target: it surfaces as `NoResponse` for that nameserver.
    async fn resolve_glue(&self, ns_name: &str, depth: usize) -> Result<Ipv4Addr, DomainError> {
        if depth > self.max_glue_depth {
            return Err(DomainError::GlueRecursionExceeded { depth });
        }

        step!(
            self.trace_steps,
            nameserver_name = ns_name,
            depth,
            "No glue for referral, resolving nameserver address"
        );

        let lame = || DomainError::NoResponse {
            server: ns_name.to_string(),
        };

        let resolution = match self.resolve_at_depth(ns_name, RecordType::A, depth).await {
            Ok(resolution) => resolution,
            Err(DomainError::NxDomain) => {
                step!(
                    self.trace_steps,
                    nameserver_name = ns_name,
                    "Nameserver name does not exist"
                );
                return Err(lame());
            }
            Err(e) => return Err(e),
        };

        resolution
            .records
            .iter()
            .find_map(|r| r.data.ipv4())
            .ok_or_else(lame)
    }

    /// Probes the roots in order; the first with a non-empty reply wins.
    async fn select_root(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<(Ipv4Addr, NameserverReply), DomainError> {
        for &root in self.root_servers.iter() {
            step!(self.trace_steps, root = %root, domain, "Trying root server");
            let reply = self.exchange.query(root, domain, record_type).await?;
            if !reply.is_empty() {
                return Ok((root, reply));
            }
        }

        Err(DomainError::NoResponse {
            server: "all root servers".to_string(),
        })
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.resolve_name(&query.domain, query.record_type).await
    }

    fn try_cache(&self, query: &DnsQuery) -> Option<DnsResolution> {
        self.cache
            .lookup(&CacheKey::from_query(query))
            .map(DnsResolution::from_cache)
    }
}
