//! Health probe handler.

use axum::Json;

use crate::api::dto::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
