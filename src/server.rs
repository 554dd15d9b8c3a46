//! HTTP server initialization and runtime setup.
//!
//! Builds the record cache, routing provider, query engine and itinerary book,
//! then runs the Axum server until Ctrl+C.

use crate::application::services::{ItineraryService, QueryEngine};
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::infrastructure::persistence::MemoryItineraryRepository;
use crate::infrastructure::providers::GoogleMapsProvider;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the handler state from the configuration.
///
/// # Errors
///
/// Returns an error if the routing provider cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        tracing::info!(
            "Cache enabled (memory, {} entries, TTL {}s)",
            config.cache_capacity,
            config.cache_ttl_seconds
        );
        Arc::new(MemoryCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_seconds),
        ))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let provider = GoogleMapsProvider::new(
        &config.maps_base_url()?,
        Duration::from_secs(config.provider_timeout_seconds),
    )
    .context("Failed to build routing provider")?;
    tracing::info!("Routing provider: {}", provider.endpoint());

    let engine = QueryEngine::new(Arc::new(provider), cache)
        .with_max_concurrency(config.max_concurrent_lookups);

    let repository = Arc::new(MemoryItineraryRepository::with_itineraries(
        config.itineraries.clone(),
    ));

    Ok(AppState::new(
        Arc::new(engine),
        Arc::new(ItineraryService::new(repository)),
        config.api_key.as_str(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The routing provider cannot be built
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
