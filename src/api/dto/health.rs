//! DTO for the health endpoint.

use serde::Serialize;

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
