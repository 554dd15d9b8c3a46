//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ItineraryService, QueryEngine};
use crate::infrastructure::persistence::MemoryItineraryRepository;

/// Handler state.
///
/// Cloned per request; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
    pub itinerary_service: Arc<ItineraryService<MemoryItineraryRepository>>,
    /// Routing provider credential passed to every batch.
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(
        engine: Arc<QueryEngine>,
        itinerary_service: Arc<ItineraryService<MemoryItineraryRepository>>,
        api_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            engine,
            itinerary_service,
            api_key: api_key.into(),
        }
    }
}
