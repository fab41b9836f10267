//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub storage: StorageStatus,
}

/// Active storage backend status.
#[derive(Debug, Serialize, ToSchema)]
pub struct StorageStatus {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - pings the active storage backend.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Storage backend reachable", body = HealthResponse),
        (status = 503, description = "Storage backend unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let backend = state.storage.backend().to_string();

    let storage = match state.storage.ping().await {
        Ok(()) => StorageStatus {
            backend,
            status: "healthy".to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Storage health check failed: {}", e);
            StorageStatus {
                backend,
                status: "unhealthy".to_string(),
                error: Some(e.to_string()),
            }
        }
    };

    let healthy = storage.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        storage,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
