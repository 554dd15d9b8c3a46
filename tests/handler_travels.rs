mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{StubProvider, create_test_state, itineraries};
use std::collections::HashMap;
use traffic_board::domain::entities::{Itinerary, TravelMode};
use traffic_board::routes::app_router;

#[tokio::test]
async fn test_add_travel() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "key");
    let service = state.itinerary_service.clone();

    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/addTravel")
        .add_query_param("Name", "Work")
        .add_query_param("Start", "Madrid")
        .add_query_param("End", "Toledo")
        .add_query_param("By", "transit")
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(response.text().contains("Destination added!"));
    assert_eq!(
        service.get("Work").await.unwrap(),
        Itinerary::new("Madrid", "Toledo", TravelMode::Transit)
    );
}

#[tokio::test]
async fn test_add_travel_unknown_mode_is_driving() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "key");
    let service = state.itinerary_service.clone();

    let server = TestServer::new(app_router(state)).unwrap();

    server
        .post("/addTravel")
        .add_query_param("Name", "Work")
        .add_query_param("Start", "Madrid")
        .add_query_param("End", "Toledo")
        .add_query_param("By", "car")
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(service.get("Work").await.unwrap().mode, TravelMode::Driving);
}

#[tokio::test]
async fn test_add_travel_missing_fields() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "key");
    let service = state.itinerary_service.clone();

    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/addTravel")
        .add_query_param("Name", "Work")
        .add_query_param("Start", "Madrid")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Impossible to add the destination!"));
    assert!(service.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_delete_travel() {
    let state = create_test_state(
        StubProvider::new(),
        itineraries(&[("Work", "Madrid", "Toledo", TravelMode::Driving)]),
        "key",
    );
    let service = state.itinerary_service.clone();

    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .delete("/deleteTravel")
        .add_query_param("Name", "Work")
        .await;

    assert_eq!(response.status_code(), StatusCode::ACCEPTED);
    assert!(response.text().contains("Destination removed!"));
    assert!(service.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_travel_is_accepted() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "key");

    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .delete("/deleteTravel")
        .add_query_param("Name", "Nowhere")
        .await;

    assert_eq!(response.status_code(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_delete_travel_without_name() {
    let state = create_test_state(StubProvider::new(), HashMap::new(), "key");

    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.delete("/deleteTravel").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Impossible to remove destination!"));
}
