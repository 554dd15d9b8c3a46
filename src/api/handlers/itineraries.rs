//! Handlers for itinerary book endpoints (list, create, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::itineraries::{
    CreateItineraryRequest, ItineraryListResponse, ItineraryResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists configured itineraries sorted by name.
///
/// # Endpoint
///
/// `GET /api/itineraries`
pub async fn itinerary_list_handler(State(state): State<AppState>) -> Json<ItineraryListResponse> {
    let items: Vec<ItineraryResponse> = state
        .itinerary_service
        .list()
        .await
        .into_iter()
        .map(|(name, itinerary)| ItineraryResponse::new(name, itinerary))
        .collect();

    Json(ItineraryListResponse {
        total: items.len(),
        items,
    })
}

/// Adds an itinerary, replacing any existing one with the same name.
///
/// # Endpoint
///
/// `POST /api/itineraries`
///
/// # Request Body
///
/// ```json
/// { "name": "Work", "start": "Madrid", "end": "Toledo", "by": "transit" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field is missing or blank.
pub async fn create_itinerary_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateItineraryRequest>,
) -> Result<(StatusCode, Json<ItineraryResponse>), AppError> {
    payload.validate()?;

    let itinerary = state
        .itinerary_service
        .add(
            &payload.name,
            &payload.start,
            &payload.end,
            payload.by.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ItineraryResponse::new(payload.name.trim(), itinerary)),
    ))
}

/// Removes an itinerary by name.
///
/// # Endpoint
///
/// `DELETE /api/itineraries/{name}`
///
/// # Errors
///
/// Returns 404 Not Found if no itinerary has that name.
pub async fn delete_itinerary_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.itinerary_service.remove(&name).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "Itinerary not found",
            json!({ "name": name }),
        ))
    }
}
