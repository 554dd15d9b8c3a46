//! Itinerary storage implementations.
//!
//! # Repositories
//!
//! - [`MemoryItineraryRepository`] - Process-local itinerary book

pub mod memory_itinerary_repository;

pub use memory_itinerary_repository::MemoryItineraryRepository;
