//! Business logic services for the application layer.

pub mod itinerary_service;
pub mod query_engine;
pub mod resolve_error;
pub mod translator;

pub use itinerary_service::ItineraryService;
pub use query_engine::QueryEngine;
pub use resolve_error::ResolveError;
pub use translator::{
    ConstantClassifier, ItineraryTranslator, TrafficClassifier, humanize_duration,
};
