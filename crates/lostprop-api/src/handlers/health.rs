//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DetailedHealthResponse>>) {
    let (status, database) = match state.stores.health_check().await {
        Ok(true) => (StatusCode::OK, "connected".to_string()),
        Ok(false) => (StatusCode::SERVICE_UNAVAILABLE, "unreachable".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable".to_string())
        }
    };

    let body = DetailedHealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.stores.backend_name().to_string(),
        database,
        realtime_topics: state.hub.topic_count(),
    };
    (status, Json(ApiResponse::ok(body)))
}
