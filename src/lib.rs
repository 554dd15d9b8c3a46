//! # Traffic Board
//!
//! A travel-time board for a named set of itineraries, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Itineraries, routes, display records and port traits
//! - **Application Layer** ([`application`]) - Batch query engine, translation, itinerary book
//! - **Infrastructure Layer** ([`infrastructure`]) - Record cache, routing provider, storage
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered board
//!
//! ## Features
//!
//! - Concurrent lookups with a bounded permit pool per batch
//! - Bounded record cache with FIFO eviction and a fixed TTL
//! - Per-itinerary failure isolation: a failed lookup drops only that itinerary
//! - Google Maps Directions provider
//!
//! ## Quick Start
//!
//! ```bash
//! export MAPS_API_KEY="your-maps-api-key"
//!
//! # Start the service with the itineraries from default.json
//! cargo run -- -c default.json
//! ```
//!
//! ## Configuration
//!
//! Itineraries come from a JSON file, service settings from environment variables.
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ItineraryService, ItineraryTranslator, QueryEngine};
    pub use crate::domain::entities::{DisplayRecord, Itinerary, TravelMode};
    pub use crate::domain::providers::{ProviderError, RouteClient, RouteProvider};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::state::AppState;
}
