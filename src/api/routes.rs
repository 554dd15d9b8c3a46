//! API route configuration.

use crate::api::handlers::{
    create_itinerary_handler, delete_itinerary_handler, itinerary_list_handler, travels_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /travels`            - Resolve the board and return display records
/// - `GET    /itineraries`        - List configured itineraries
/// - `POST   /itineraries`        - Add or replace an itinerary
/// - `DELETE /itineraries/{name}` - Remove an itinerary
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/travels", get(travels_handler))
        .route(
            "/itineraries",
            get(itinerary_list_handler).post(create_itinerary_handler),
        )
        .route("/itineraries/{name}", delete(delete_itinerary_handler))
}
