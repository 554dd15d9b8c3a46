//! Domain layer containing the travel entities and the ports the engine talks through.
//!
//! This module holds the data model of a traffic board and the trait definitions that
//! abstract everything external: the routing provider and the itinerary store. It has
//! no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Itineraries, display records, and the provider route hierarchy
//! - [`providers`] - Routing provider port ([`providers::RouteProvider`] / [`providers::RouteClient`])
//! - [`repositories`] - Itinerary storage port
//!
//! # Query Flow
//!
//! 1. A batch of named [`entities::Itinerary`] values is handed to the query engine
//! 2. Each name is looked up in the record cache
//! 3. Misses are resolved through a [`providers::RouteClient`]
//! 4. Provider routes are translated into [`entities::DisplayRecord`] values

pub mod entities;
pub mod providers;
pub mod repositories;
