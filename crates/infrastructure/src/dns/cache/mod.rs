//! Answer cache keyed by (name, type), bounded by record TTLs.

pub mod entry;
pub mod key;
pub mod metrics;
pub mod storage;

pub use entry::CacheEntry;
pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use storage::TtlCache;
