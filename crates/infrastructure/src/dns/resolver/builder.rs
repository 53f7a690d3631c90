use super::exchange::NameserverExchange;
use super::iterative::IterativeResolver;
use crate::dns::cache::TtlCache;
use crate::dns::transport::{DnsTransport, TcpTransport, UdpTransport};
use ferrous_resolver_domain::config::{CacheConfig, ResolverConfig};
use ferrous_resolver_domain::DomainError;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    config: ResolverConfig,
    cache: Option<Arc<TtlCache>>,
    udp: Arc<dyn DnsTransport>,
    tcp: Arc<dyn DnsTransport>,
    trace_steps: bool,
}

impl ResolverBuilder {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            cache: None,
            udp: Arc::new(UdpTransport::new()),
            tcp: Arc::new(TcpTransport::new()),
            trace_steps: false,
        }
    }

    pub fn with_cache(mut self, cache: Arc<TtlCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_transports(
        mut self,
        udp: Arc<dyn DnsTransport>,
        tcp: Arc<dyn DnsTransport>,
    ) -> Self {
        self.udp = udp;
        self.tcp = tcp;
        self
    }

    /// Reports every delegation step at INFO.
    pub fn with_step_tracing(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }

    pub fn build(self) -> Result<IterativeResolver, DomainError> {
        let roots: Vec<Ipv4Addr> = self.config.root_server_addrs().map_err(|bad| {
            DomainError::ConfigError(format!("'{}' is not an IPv4 root server address", bad))
        })?;
        if roots.is_empty() {
            return Err(DomainError::ConfigError(
                "no root servers configured".to_string(),
            ));
        }

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(TtlCache::from_config(&CacheConfig::default())));

        info!(
            roots = roots.len(),
            port = self.config.nameserver_port,
            timeout_ms = self.config.query_timeout_ms,
            max_delegation_steps = self.config.max_delegation_steps,
            max_glue_depth = self.config.max_glue_depth,
            "Building iterative resolver"
        );

        let exchange = NameserverExchange::new(
            self.udp,
            self.tcp,
            self.config.nameserver_port,
            self.config.query_timeout(),
        );

        Ok(IterativeResolver::new(
            exchange,
            cache,
            Arc::from(roots),
            self.config.max_delegation_steps,
            self.config.max_glue_depth,
            self.trace_steps,
        ))
    }
}
