//! DTOs for itinerary book endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Itinerary, TravelMode};

/// Request to add or replace an itinerary.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItineraryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Start must not be empty"))]
    pub start: String,

    #[validate(length(min = 1, message = "End must not be empty"))]
    pub end: String,

    /// Travel mode; unknown or missing values mean driving.
    #[serde(default)]
    pub by: Option<String>,
}

/// JSON representation of a stored itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub name: String,
    pub start: String,
    pub end: String,
    pub by: TravelMode,
}

impl ItineraryResponse {
    pub fn new(name: impl Into<String>, itinerary: Itinerary) -> Self {
        Self {
            name: name.into(),
            start: itinerary.origin,
            end: itinerary.destination,
            by: itinerary.mode,
        }
    }
}

/// Every configured itinerary, sorted by name.
#[derive(Debug, Serialize)]
pub struct ItineraryListResponse {
    pub total: usize,
    pub items: Vec<ItineraryResponse>,
}
