//! No-op cache implementation for disabled caching.

use super::service::CacheService;
use crate::domain::entities::DisplayRecord;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is explicitly disabled (`CACHE_ENABLED=false`). Every lookup
/// misses, so every itinerary goes to the routing provider.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> Option<DisplayRecord> {
        None
    }

    async fn put(&self, _key: &str, _value: DisplayRecord) {}

    async fn len(&self) -> usize {
        0
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}
