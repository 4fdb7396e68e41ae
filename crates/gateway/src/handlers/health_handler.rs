//! Health check handlers.

use axum::{response::Json, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use domain::HEALTH_STATUS_UP;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    /// Current server time, RFC 3339
    pub timestamp: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness probe. Always reports `UP`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS_UP.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
