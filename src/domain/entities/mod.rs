//! Core domain entities representing the travel data model.
//!
//! Entities are plain data structures without orchestration logic.
//!
//! # Entity Types
//!
//! - [`Itinerary`] - A named origin/destination/mode triple to resolve
//! - [`TravelMode`] - How the itinerary is travelled
//! - [`DisplayRecord`] - The resolved, human-readable answer for one itinerary
//! - [`Route`], [`Leg`], [`Step`], [`Distance`] - The provider response hierarchy

pub mod display_record;
pub mod itinerary;
pub mod route;

pub use display_record::DisplayRecord;
pub use itinerary::{Itinerary, TravelMode, translate_mode};
pub use route::{Distance, Leg, Route, Step};
