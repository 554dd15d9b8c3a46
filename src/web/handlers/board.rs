//! Board page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::domain::entities::DisplayRecord;
use crate::state::AppState;

/// Template for the board page.
///
/// Renders `templates/board.html` with one row per resolved itinerary.
#[derive(Template, WebTemplate)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub records: Vec<DisplayRecord>,
}

/// Shown when no itinerary resolved.
#[derive(Template, WebTemplate)]
#[template(path = "no_destinations.html")]
pub struct NoDestinationsTemplate {}

/// Resolves the current itineraries and renders the board.
///
/// # Endpoint
///
/// `GET /`
///
/// Records are sorted by itinerary name. If nothing resolved (no itineraries, or
/// every lookup failed) the no-destinations page is rendered instead.
pub async fn board_handler(State(state): State<AppState>) -> Response {
    let itineraries = state.itinerary_service.snapshot().await;
    let mut records = state.engine.query_all(&itineraries, &state.api_key).await;

    if records.is_empty() {
        return NoDestinationsTemplate {}.into_response();
    }

    records.sort_by(|a, b| a.name.cmp(&b.name));
    BoardTemplate { records }.into_response()
}
