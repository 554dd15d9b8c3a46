//! Routing provider port.
//!
//! The engine never talks to a concrete routing service. It asks a
//! [`RouteProvider`] for a [`RouteClient`] bound to a credential and asks that
//! client for routes.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::providers::GoogleMapsProvider`] - Directions API over HTTP
//! - Test mocks available with `cfg(test)`

pub mod route_provider;

pub use route_provider::{ProviderError, RouteClient, RouteProvider};

#[cfg(test)]
pub use route_provider::{MockRouteClient, MockRouteProvider};
