//! Itinerary book management service.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{Itinerary, translate_mode};
use crate::domain::repositories::ItineraryRepository;
use crate::error::AppError;

/// Service for the set of itineraries shown on the board.
///
/// Validates input before it reaches the repository. Travel modes are taken as
/// free text and mapped with [`translate_mode`], so unknown modes become driving.
pub struct ItineraryService<R: ItineraryRepository> {
    repository: Arc<R>,
}

impl<R: ItineraryRepository> ItineraryService<R> {
    /// Creates a new itinerary service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds an itinerary, replacing any existing one with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name`, `origin` or `destination` is blank.
    pub async fn add(
        &self,
        name: &str,
        origin: &str,
        destination: &str,
        mode: &str,
    ) -> Result<Itinerary, AppError> {
        let name = name.trim();
        let origin = origin.trim();
        let destination = destination.trim();

        let missing: Vec<&str> = [("name", name), ("start", origin), ("end", destination)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Impossible to add the destination",
                json!({ "missing": missing }),
            ));
        }

        let itinerary = Itinerary::new(origin, destination, translate_mode(mode.trim()));
        let replaced = self
            .repository
            .upsert(name.to_string(), itinerary.clone())
            .await;

        info!(
            "Itinerary {} {}: {} -> {} ({})",
            if replaced { "replaced" } else { "added" },
            name,
            itinerary.origin,
            itinerary.destination,
            itinerary.mode
        );

        Ok(itinerary)
    }

    /// Removes an itinerary by name.
    ///
    /// Returns whether an itinerary was removed; removing an unknown name is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` is blank.
    pub async fn remove(&self, name: &str) -> Result<bool, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Impossible to remove destination",
                json!({ "missing": ["name"] }),
            ));
        }

        let removed = self.repository.remove(name).await;
        if removed {
            info!("Itinerary removed: {}", name);
        }
        Ok(removed)
    }

    /// Retrieves one itinerary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no itinerary has that name.
    pub async fn get(&self, name: &str) -> Result<Itinerary, AppError> {
        self.repository
            .find(name)
            .await
            .ok_or_else(|| AppError::not_found("Itinerary not found", json!({ "name": name })))
    }

    /// Returns the current itinerary batch keyed by name.
    pub async fn snapshot(&self) -> HashMap<String, Itinerary> {
        self.repository.all().await
    }

    /// Returns every itinerary sorted by name.
    pub async fn list(&self) -> Vec<(String, Itinerary)> {
        let mut itineraries: Vec<_> = self.repository.all().await.into_iter().collect();
        itineraries.sort_by(|a, b| a.0.cmp(&b.0));
        itineraries
    }
}
