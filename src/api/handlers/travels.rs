//! Handler for the resolved board endpoint.

use axum::{Json, extract::State};

use crate::api::dto::travels::{TravelsResponse, TravelsSummary};
use crate::state::AppState;

/// Resolves every configured itinerary and returns the records that succeeded.
///
/// # Endpoint
///
/// `GET /api/travels`
///
/// # Batch Processing
///
/// Itineraries are resolved concurrently. One that fails (no route, provider
/// error) is left out of `items` and counted in `missing`; the request itself
/// still succeeds.
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "resolved": 1, "missing": 1 },
///   "items": [
///     {
///       "name": "Home",
///       "origin": "Madrid",
///       "destination": "Barcelona",
///       "mode": "driving",
///       "duration": "6 hours and 5 minutes",
///       "color": "green",
///       "summary": "A-2",
///       "distance": "621 km"
///     }
///   ]
/// }
/// ```
pub async fn travels_handler(State(state): State<AppState>) -> Json<TravelsResponse> {
    let itineraries = state.itinerary_service.snapshot().await;
    let total = itineraries.len();

    let mut items = state.engine.query_all(&itineraries, &state.api_key).await;
    items.sort_by(|a, b| a.name.cmp(&b.name));

    let resolved = items.len();

    Json(TravelsResponse {
        summary: TravelsSummary {
            total,
            resolved,
            missing: total.saturating_sub(resolved),
        },
        items,
    })
}
