//! Board route configuration.

use crate::state::AppState;
use crate::web::handlers::{add_travel_handler, board_handler, delete_travel_handler};
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Board routes, mounted at the root.
///
/// # Endpoints
///
/// - `GET    /`             - Board with every resolved itinerary
/// - `POST   /addTravel`    - Add an itinerary (`Name`, `Start`, `End`, `By` query parameters)
/// - `DELETE /deleteTravel` - Remove an itinerary (`Name` query parameter)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(board_handler))
        .route("/addTravel", post(add_travel_handler))
        .route("/deleteTravel", delete(delete_travel_handler))
}
