//! In-process bounded cache with a fixed time-to-live.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use super::service::CacheService;
use crate::domain::entities::DisplayRecord;

struct CacheEntry {
    value: DisplayRecord,
    inserted_at: Instant,
}

#[derive(Default)]
struct Entries {
    map: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<String>,
}

impl Entries {
    fn remove(&mut self, key: &str) {
        self.map.remove(key);
        self.order.retain(|k| k != key);
    }

    fn purge_expired(&mut self, now: Instant, ttl: Duration) {
        self.map
            .retain(|_, entry| now.duration_since(entry.inserted_at) < ttl);
        let map = &self.map;
        self.order.retain(|key| map.contains_key(key));
    }
}

/// Fixed-capacity record cache with per-entry expiration.
///
/// - Entries older than `ttl` are treated as absent and dropped lazily on lookup.
/// - Inserting a new key into a full cache first drops expired entries and then,
///   if still full, evicts the oldest-inserted entry. Reads never promote an entry.
/// - Overwriting an existing key replaces its value and refreshes its timestamp
///   without changing its eviction position or the entry count.
///
/// All state sits behind a single mutex held only for the duration of one operation.
pub struct MemoryCache {
    capacity: usize,
    ttl: Duration,
    entries: Mutex<Entries>,
}

impl MemoryCache {
    /// Creates an empty cache.
    ///
    /// A `capacity` of zero is raised to one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        debug!(
            "Using MemoryCache (capacity: {}, TTL: {}s)",
            capacity,
            ttl.as_secs()
        );
        Self {
            capacity: capacity.max(1),
            ttl,
            entries: Mutex::new(Entries::default()),
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> Option<DisplayRecord> {
        let mut entries = self.entries.lock().await;

        let expired = match entries.map.get(key) {
            None => {
                debug!("Cache MISS: {}", key);
                return None;
            }
            Some(entry) => entry.inserted_at.elapsed() >= self.ttl,
        };

        if expired {
            debug!("Cache EXPIRED: {}", key);
            entries.remove(key);
            return None;
        }

        debug!("Cache HIT: {}", key);
        entries.map.get(key).map(|entry| entry.value.clone())
    }

    async fn put(&self, key: &str, value: DisplayRecord) {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.map.get_mut(key) {
            entry.value = value;
            entry.inserted_at = now;
            debug!("Cache SET (overwrite): {}", key);
            return;
        }

        if entries.map.len() >= self.capacity {
            entries.purge_expired(now, self.ttl);
        }

        while entries.map.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.map.remove(&oldest);
            debug!("Cache EVICT: {}", oldest);
        }

        entries.map.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: now,
            },
        );
        entries.order.push_back(key.to_string());
        debug!("Cache SET: {} (TTL: {}s)", key, self.ttl.as_secs());
    }

    async fn len(&self) -> usize {
        let entries = self.entries.lock().await;
        entries
            .map
            .values()
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .count()
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> DisplayRecord {
        DisplayRecord {
            name: name.to_string(),
            origin: "Madrid".to_string(),
            destination: "Barcelona".to_string(),
            mode: "driving".to_string(),
            duration: "6 hours and 5 minutes".to_string(),
            color: "green".to_string(),
            summary: "A-2".to_string(),
            distance: "621 km".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_after_put() {
        let cache = MemoryCache::new(5, Duration::from_secs(600));

        cache.put("A", record("A")).await;

        assert_eq!(cache.get("A").await, Some(record("A")));
        assert!(cache.get("B").await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest_inserted() {
        let cache = MemoryCache::new(2, Duration::from_secs(600));

        cache.put("A", record("A")).await;
        cache.put("B", record("B")).await;
        // Reads must not promote A.
        assert!(cache.get("A").await.is_some());
        cache.put("C", record("C")).await;

        assert!(cache.get("A").await.is_none());
        assert!(cache.get("B").await.is_some());
        assert!(cache.get("C").await.is_some());
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_overwrite_does_not_evict() {
        let cache = MemoryCache::new(2, Duration::from_secs(600));

        cache.put("A", record("A")).await;
        cache.put("B", record("B")).await;

        let mut updated = record("A");
        updated.duration = "45 minutes".to_string();
        cache.put("A", updated.clone()).await;

        assert_eq!(cache.get("A").await, Some(updated));
        assert!(cache.get("B").await.is_some());
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_never_exceeds_capacity() {
        let cache = MemoryCache::new(5, Duration::from_secs(600));

        for i in 0..20 {
            cache.put(&format!("key-{i}"), record("x")).await;
            assert!(cache.len().await <= 5);
        }

        for i in 0..15 {
            assert!(cache.get(&format!("key-{i}")).await.is_none());
        }
        for i in 15..20 {
            assert!(cache.get(&format!("key-{i}")).await.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_at_ttl() {
        let cache = MemoryCache::new(5, Duration::from_secs(600));

        cache.put("A", record("A")).await;

        tokio::time::advance(Duration::from_secs(599)).await;
        assert!(cache.get("A").await.is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get("A").await.is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entries_make_room_before_eviction() {
        let cache = MemoryCache::new(2, Duration::from_secs(60));

        cache.put("A", record("A")).await;
        tokio::time::advance(Duration::from_secs(30)).await;
        cache.put("B", record("B")).await;
        tokio::time::advance(Duration::from_secs(31)).await;

        // A has expired, so inserting C drops A and keeps B.
        cache.put("C", record("C")).await;

        assert!(cache.get("A").await.is_none());
        assert!(cache.get("B").await.is_some());
        assert!(cache.get("C").await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_refreshes_ttl() {
        let cache = MemoryCache::new(5, Duration::from_secs(60));

        cache.put("A", record("A")).await;
        tokio::time::advance(Duration::from_secs(45)).await;
        cache.put("A", record("A")).await;
        tokio::time::advance(Duration::from_secs(45)).await;

        assert!(cache.get("A").await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_is_raised_to_one() {
        let cache = MemoryCache::new(0, Duration::from_secs(60));

        cache.put("A", record("A")).await;
        assert!(cache.get("A").await.is_some());

        cache.put("B", record("B")).await;
        assert!(cache.get("A").await.is_none());
        assert!(cache.get("B").await.is_some());
        assert_eq!(cache.len().await, 1);
    }
}
