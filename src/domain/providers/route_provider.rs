//! Route provider traits and error type.

use crate::domain::entities::{Route, TravelMode};
use async_trait::async_trait;

/// Errors raised by a routing provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The client could not be constructed (bad credential or configuration).
    #[error("routing provider unavailable: {0}")]
    Unavailable(String),
    /// The route call failed at the transport or provider level.
    #[error("route query failed: {0}")]
    RouteQueryFailed(String),
}

/// Factory for credential-bound routing clients.
#[cfg_attr(test, mockall::automock)]
pub trait RouteProvider: Send + Sync {
    /// Builds a client authenticated with `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] if the credential is invalid or the
    /// client cannot be constructed.
    fn client(&self, credential: &str) -> Result<Box<dyn RouteClient>, ProviderError>;
}

/// A routing client bound to one credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Computes candidate routes from `origin` to `destination`.
    ///
    /// # Returns
    ///
    /// - `Ok(routes)` with one or more routes on success
    /// - `Ok(vec![])`, or a first route without legs, when no route exists
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::RouteQueryFailed`] on transport or provider errors.
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ProviderError>;
}
