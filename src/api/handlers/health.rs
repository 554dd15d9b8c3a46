//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Cache**: Backend in use and live entry count
/// 2. **Provider**: Whether a routing provider credential is configured
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "memory, 3 entries" },
///     "provider": { "status": "ok", "message": "API key configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let cache_check = check_cache(&state).await;

    let provider_check = check_provider(&state);

    let all_healthy = cache_check.is_ok() && provider_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: cache_check,
            provider: provider_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports the cache backend and how many live records it holds.
async fn check_cache(state: &AppState) -> CheckStatus {
    let cache = state.engine.cache();
    CheckStatus::ok(format!("{}, {} entries", cache.backend(), cache.len().await))
}

/// Lookups cannot succeed without a credential.
fn check_provider(state: &AppState) -> CheckStatus {
    if state.api_key.trim().is_empty() {
        CheckStatus::error("API key missing")
    } else {
        CheckStatus::ok("API key configured")
    }
}
