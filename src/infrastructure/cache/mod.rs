//! Caching layer that short-circuits repeat itinerary lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-process cache with FIFO eviction and a fixed TTL
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::CacheService;
