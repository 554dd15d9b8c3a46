//! Reqwest-backed Directions API adapter.
//!
//! This adapter owns transport details only: request building, timeout and HTTP
//! error mapping, and JSON decoding into domain routes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::DirectionsResponseDto;
use crate::domain::entities::{Route, TravelMode};
use crate::domain::providers::{ProviderError, RouteClient, RouteProvider};

const DIRECTIONS_PATH: &str = "maps/api/directions/json";
const USER_AGENT: &str = concat!("traffic-board/", env!("CARGO_PKG_VERSION"));

/// Route provider backed by the Google Maps Directions API.
///
/// Holds one pooled HTTP client; every [`RouteProvider::client`] call hands out a
/// lightweight [`GoogleMapsClient`] sharing that pool.
pub struct GoogleMapsProvider {
    http: Client,
    endpoint: Url,
}

impl GoogleMapsProvider {
    /// Builds a provider against `base_url` with an explicit request timeout.
    ///
    /// The Directions path is resolved relative to `base_url`
    /// (`https://maps.googleapis.com` in production).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when the endpoint URL cannot be built
    /// or the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ProviderError> {
        let endpoint = base_url.join(DIRECTIONS_PATH).map_err(|e| {
            ProviderError::Unavailable(format!("invalid Directions endpoint: {e}"))
        })?;

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// The resolved Directions endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RouteProvider for GoogleMapsProvider {
    fn client(&self, credential: &str) -> Result<Box<dyn RouteClient>, ProviderError> {
        let api_key = credential.trim();
        if api_key.is_empty() {
            return Err(ProviderError::Unavailable(
                "an API key is required".to_string(),
            ));
        }

        Ok(Box::new(GoogleMapsClient {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            api_key: api_key.to_string(),
        }))
    }
}

/// Directions client bound to one API key.
pub struct GoogleMapsClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

#[async_trait]
impl RouteClient for GoogleMapsClient {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ProviderError> {
        debug!("Directions request: {} -> {} ({})", origin, destination, mode);

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let decoded: DirectionsResponseDto = serde_json::from_slice(body.as_ref()).map_err(|e| {
            ProviderError::RouteQueryFailed(format!("invalid Directions JSON payload: {e}"))
        })?;

        decoded
            .into_domain_routes()
            .map_err(ProviderError::RouteQueryFailed)
    }
}

fn map_transport_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::RouteQueryFailed(format!("request timed out: {}", error.without_url()))
    } else {
        ProviderError::RouteQueryFailed(error.without_url().to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ProviderError {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();

    if preview.is_empty() {
        ProviderError::RouteQueryFailed(format!("status {}", status.as_u16()))
    } else {
        ProviderError::RouteQueryFailed(format!("status {}: {}", status.as_u16(), preview))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleMapsProvider {
        let base = Url::parse("https://maps.googleapis.com").unwrap();
        GoogleMapsProvider::new(&base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_resolution() {
        assert_eq!(
            provider().endpoint().as_str(),
            "https://maps.googleapis.com/maps/api/directions/json"
        );
    }

    #[test]
    fn test_blank_credential_is_unavailable() {
        let result = provider().client("   ");

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[test]
    fn test_client_for_valid_credential() {
        assert!(provider().client("test-key").is_ok());
    }

    #[test]
    fn test_status_error_preview() {
        let err = map_status_error(StatusCode::BAD_GATEWAY, b"  upstream\n  down ");

        assert_eq!(err.to_string(), "route query failed: status 502: upstream down");
    }
}
