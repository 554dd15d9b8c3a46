//! Cache service trait.

use async_trait::async_trait;

use crate::domain::entities::DisplayRecord;

/// Trait for caching resolved display records by itinerary name.
///
/// Implementations synchronise internally: `get` and `put` may be called from many
/// concurrent workers without any caller-side locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - Bounded, FIFO-evicting cache with a fixed TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the record cached under `key`.
    ///
    /// # Returns
    ///
    /// - `Some(record)` on a live hit
    /// - `None` if the key is absent or its entry has outlived the TTL
    async fn get(&self, key: &str) -> Option<DisplayRecord>;

    /// Stores a record under `key`, overwriting any previous value.
    async fn put(&self, key: &str, value: DisplayRecord);

    /// Number of live (non-expired) entries.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Short backend name for health reporting.
    fn backend(&self) -> &'static str;
}
