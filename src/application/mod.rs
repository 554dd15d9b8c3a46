//! Application layer services implementing the board's behaviour.
//!
//! This layer orchestrates domain operations: it resolves itinerary batches
//! through the routing provider port and the record cache, and manages the
//! itinerary book for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::query_engine::QueryEngine`] - Concurrent, cached batch resolution
//! - [`services::translator::ItineraryTranslator`] - Provider route → display record
//! - [`services::itinerary_service::ItineraryService`] - Itinerary book management

pub mod services;
