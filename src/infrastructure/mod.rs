//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for caching, routing, and itinerary storage.
//!
//! # Modules
//!
//! - [`cache`] - Record caching (bounded in-memory and no-op implementations)
//! - [`persistence`] - In-memory itinerary storage
//! - [`providers`] - Routing provider adapters

pub mod cache;
pub mod persistence;
pub mod providers;
