use std::sync::Arc;
use tracing::info;

use crate::ports::DnsCachePort;

pub struct ClearCacheUseCase {
    cache: Arc<dyn DnsCachePort>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn DnsCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> usize {
        let removed = self.cache.clear();
        info!(removed, "Cache cleared");
        removed
    }
}
