//! Liveness probe for load balancers and process supervisors.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

/// Body of `GET /health`.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process can answer requests
    #[schema(example = "ok")]
    pub status: String,
}

/// Report that quotos-server is up
///
/// Carries no dependency checks: the site has no database or upstream to probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "quotos-server is accepting requests", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
