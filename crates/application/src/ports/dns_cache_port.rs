/// Administrative view of the answer cache.
pub trait DnsCachePort: Send + Sync {
    /// Removes every entry, returning how many were dropped.
    fn clear(&self) -> usize;

    fn cache_size(&self) -> usize;
}
