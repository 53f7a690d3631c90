use ferrous_resolver_application::use_cases::{ClearCacheUseCase, ResolveQueryUseCase};
use ferrous_resolver_domain::{Config, DomainError};
use ferrous_resolver_infrastructure::dns::{ResolverBuilder, TtlCache};
use std::sync::Arc;

/// Use cases wired to the iterative resolver and its cache.
pub struct Services {
    pub resolve_query: ResolveQueryUseCase,
    pub clear_cache: ClearCacheUseCase,
}

impl Services {
    pub fn build(config: &Config, trace_steps: bool) -> Result<Self, DomainError> {
        let cache = Arc::new(TtlCache::from_config(&config.cache));

        let resolver = ResolverBuilder::new(config.resolver.clone())
            .with_cache(Arc::clone(&cache))
            .with_step_tracing(trace_steps)
            .build()?;

        Ok(Self {
            resolve_query: ResolveQueryUseCase::new(Arc::new(resolver)),
            clear_cache: ClearCacheUseCase::new(cache),
        })
    }
}
