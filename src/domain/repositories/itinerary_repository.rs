//! Repository trait for the itinerary book.

use std::collections::HashMap;

use crate::domain::entities::Itinerary;
use async_trait::async_trait;

/// Repository interface for the named itineraries shown on the board.
///
/// Names are unique: storing an itinerary under an existing name replaces it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryItineraryRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Stores an itinerary, replacing any existing one with the same name.
    ///
    /// Returns `true` if an itinerary with that name already existed.
    async fn upsert(&self, name: String, itinerary: Itinerary) -> bool;

    /// Removes an itinerary by name.
    ///
    /// Returns `true` if something was removed.
    async fn remove(&self, name: &str) -> bool;

    /// Finds an itinerary by name.
    async fn find(&self, name: &str) -> Option<Itinerary>;

    /// Returns a copy of every stored itinerary keyed by name.
    async fn all(&self) -> HashMap<String, Itinerary>;
}
