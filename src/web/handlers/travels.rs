//! Add/remove itinerary handlers driven by query parameters.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::state::AppState;

const ADDED: &str = "Destination added!";
const NOT_ADDED: &str = "Impossible to add the destination!";
const REMOVED: &str = "Destination removed!";
const NOT_REMOVED: &str = "Impossible to remove destination!";

/// Confirmation page for add/remove operations.
#[derive(Template, WebTemplate)]
#[template(path = "operation.html")]
pub struct OperationTemplate {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AddTravelQuery {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "End", default)]
    pub end: String,
    #[serde(rename = "By", default)]
    pub by: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTravelQuery {
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// Adds an itinerary.
///
/// # Endpoint
///
/// `POST /addTravel?Name=Work&Start=Madrid&End=Toledo&By=transit`
///
/// # Response Codes
///
/// - **201 Created**: Itinerary stored (an existing one with that name is replaced)
/// - **400 Bad Request**: `Name`, `Start` or `End` missing or blank
pub async fn add_travel_handler(
    State(state): State<AppState>,
    Query(query): Query<AddTravelQuery>,
) -> impl IntoResponse {
    match state
        .itinerary_service
        .add(&query.name, &query.start, &query.end, &query.by)
        .await
    {
        Ok(_) => (StatusCode::CREATED, OperationTemplate { message: ADDED }),
        Err(e) => {
            tracing::warn!("Rejected itinerary {:?}: {}", query.name, e);
            (StatusCode::BAD_REQUEST, OperationTemplate { message: NOT_ADDED })
        }
    }
}

/// Removes an itinerary.
///
/// # Endpoint
///
/// `DELETE /deleteTravel?Name=Work`
///
/// # Response Codes
///
/// - **202 Accepted**: Name given; removing an unknown name also succeeds
/// - **400 Bad Request**: `Name` missing or blank
pub async fn delete_travel_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteTravelQuery>,
) -> impl IntoResponse {
    match state.itinerary_service.remove(&query.name).await {
        Ok(_) => (StatusCode::ACCEPTED, OperationTemplate { message: REMOVED }),
        Err(e) => {
            tracing::warn!("Rejected removal: {}", e);
            (StatusCode::BAD_REQUEST, OperationTemplate { message: NOT_REMOVED })
        }
    }
}
