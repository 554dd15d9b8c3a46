//! Google Maps Directions adapter.
//!
//! This module provides a thin HTTP implementation of the
//! [`crate::domain::providers::RouteProvider`] port.

mod dto;
mod http_provider;

pub use http_provider::{GoogleMapsClient, GoogleMapsProvider};
