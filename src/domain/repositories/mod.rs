//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ItineraryRepository`] - Named itinerary storage

pub mod itinerary_repository;

pub use itinerary_repository::ItineraryRepository;

#[cfg(test)]
pub use itinerary_repository::MockItineraryRepository;
