mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{StubProvider, create_test_state, itineraries};
use std::collections::HashMap;
use traffic_board::api::handlers::health_handler;
use traffic_board::domain::entities::TravelMode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let provider = StubProvider::new().with_route("Toledo", "A-42", 50, "72 km");
    let state = create_test_state(
        provider,
        itineraries(&[("Work", "Madrid", "Toledo", TravelMode::Driving)]),
        "key",
    );
    let batch = state.itinerary_service.snapshot().await;
    state.engine.query_all(&batch, "key").await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "memory, 1 entries");
    assert_eq!(json["checks"]["provider"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_without_api_key() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "");
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["provider"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "key");
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("cache").is_some());
    assert!(json["checks"].get("provider").is_some());
}
