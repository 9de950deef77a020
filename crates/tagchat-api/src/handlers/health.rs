//! Health check handler

use axum::Json;
use tagchat_service::dto::HealthResponse;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
