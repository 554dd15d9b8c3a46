//! In-memory itinerary repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Itinerary;
use crate::domain::repositories::ItineraryRepository;

/// Itinerary book held in process memory.
///
/// Seeded from the configuration file at startup. Changes made through the HTTP
/// API last until the process exits.
#[derive(Default)]
pub struct MemoryItineraryRepository {
    itineraries: RwLock<HashMap<String, Itinerary>>,
}

impl MemoryItineraryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `itineraries`.
    pub fn with_itineraries(itineraries: HashMap<String, Itinerary>) -> Self {
        Self {
            itineraries: RwLock::new(itineraries),
        }
    }
}

#[async_trait]
impl ItineraryRepository for MemoryItineraryRepository {
    async fn upsert(&self, name: String, itinerary: Itinerary) -> bool {
        self.itineraries
            .write()
            .await
            .insert(name, itinerary)
            .is_some()
    }

    async fn remove(&self, name: &str) -> bool {
        self.itineraries.write().await.remove(name).is_some()
    }

    async fn find(&self, name: &str) -> Option<Itinerary> {
        self.itineraries.read().await.get(name).cloned()
    }

    async fn all(&self) -> HashMap<String, Itinerary> {
        self.itineraries.read().await.clone()
    }
}
