//! Server route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quotos",
        version = "0.1.0",
        description = "Quotos web server",
        license(name = "GPL-2.0")
    ),
    paths(handlers::system::health),
    components(schemas(HealthResponse)),
    tags(
        (name = "system", description = "System health and status endpoints")
    )
)]
pub struct ApiDoc;

/// Create the router: health check, API docs, then pages and assets as fallback.
pub fn create_router(state: AppState) -> Router {
    let api = ApiDoc::openapi();

    Router::new()
        .route("/health", get(handlers::health))
        .merge(Scalar::with_url("/docs", api))
        .fallback(handlers::serve_page)
        .with_state(state)
}
