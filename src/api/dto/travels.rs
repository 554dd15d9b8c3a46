//! DTOs for the resolved board endpoint.

use serde::Serialize;

use crate::domain::entities::DisplayRecord;

/// Board contents for the current itinerary batch.
#[derive(Debug, Serialize)]
pub struct TravelsResponse {
    pub summary: TravelsSummary,
    pub items: Vec<DisplayRecord>,
}

/// Counts for one batch.
///
/// `missing` itineraries were dropped by the engine (no route, provider failure).
#[derive(Debug, Serialize)]
pub struct TravelsSummary {
    pub total: usize,
    pub resolved: usize,
    pub missing: usize,
}
