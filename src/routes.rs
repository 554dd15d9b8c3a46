//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET    /`                 - Traffic board page
//! - `POST   /addTravel`        - Add an itinerary from query parameters
//! - `DELETE /deleteTravel`     - Remove an itinerary by name
//! - `GET    /health`           - Health check: cache, routing provider
//! - `/api/*`                   - JSON API
//! - `/resources/*`             - Static assets
//! - `GET    /favicon.ico`      - Site icon
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Path normalization is applied around the whole router by [`crate::server`].

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/resources", ServeDir::new("resources"))
        .route_service("/favicon.ico", ServeFile::new("resources/favicon.ico"))
        .with_state(state)
        .layer(tracing::layer())
}
