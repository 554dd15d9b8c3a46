//! Routing provider adapters.
//!
//! # Providers
//!
//! - [`GoogleMapsProvider`] - Google Maps Directions API over HTTP

pub mod google_maps;

pub use google_maps::{GoogleMapsClient, GoogleMapsProvider};
