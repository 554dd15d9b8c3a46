//! Per-itinerary resolution failures.

use crate::domain::providers::ProviderError;

/// Why one itinerary produced no record.
///
/// These never escape a batch: the engine logs them and leaves the itinerary out
/// of the result. The variants only differ for observability.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("routing provider unavailable for '{name}': {reason}")]
    ProviderUnavailable { name: String, reason: String },

    #[error("route query failed for '{name}': {reason}")]
    RouteQueryFailed { name: String, reason: String },

    #[error("unable to calculate the route for '{name}'")]
    NoRouteFound { name: String },
}

impl ResolveError {
    /// Wraps a provider error for the itinerary `name`.
    pub fn from_provider(name: &str, error: ProviderError) -> Self {
        match error {
            ProviderError::Unavailable(reason) => Self::ProviderUnavailable {
                name: name.to_string(),
                reason,
            },
            ProviderError::RouteQueryFailed(reason) => Self::RouteQueryFailed {
                name: name.to_string(),
                reason,
            },
        }
    }

    /// Name of the itinerary that failed.
    pub fn name(&self) -> &str {
        match self {
            Self::ProviderUnavailable { name, .. }
            | Self::RouteQueryFailed { name, .. }
            | Self::NoRouteFound { name } => name,
        }
    }

    /// Stable label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable { .. } => "provider_unavailable",
            Self::RouteQueryFailed { .. } => "route_query_failed",
            Self::NoRouteFound { .. } => "no_route_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_provider_keeps_variant() {
        let err = ResolveError::from_provider("A", ProviderError::Unavailable("bad key".into()));
        assert!(matches!(err, ResolveError::ProviderUnavailable { .. }));
        assert_eq!(err.name(), "A");
        assert_eq!(err.kind(), "provider_unavailable");

        let err = ResolveError::from_provider("B", ProviderError::RouteQueryFailed("503".into()));
        assert_eq!(err.kind(), "route_query_failed");
        assert_eq!(err.to_string(), "route query failed for 'B': 503");
    }
}
