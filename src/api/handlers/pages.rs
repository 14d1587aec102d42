//! Page and asset fallback handler.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::api::state::AppState;
use crate::api::static_assets::asset_response;
use crate::site::{Route, mount_point, pages};

/// Serve everything not matched by an explicit route.
///
/// Routing logic:
/// 1. Paths under api/ are reserved and return 404
/// 2. Exact embedded asset match (logo, stylesheet, client bundle)
/// 3. Known page (/, /home) rendered inside the document shell
/// 4. Anything else renders the not-found page with 404
#[instrument(skip(state))]
pub async fn serve_page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = uri.path().trim_start_matches('/');

    if path.starts_with("api/") {
        return StatusCode::NOT_FOUND.into_response();
    }

    if let Some(response) = asset_response(path) {
        return response;
    }

    let route = Route::resolve(uri.path());
    let status = match route {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    };
    debug!(?route, %status, "rendering page");

    let shell = state.shell();
    let body = mount_point(&pages::render(route, shell.metadata()));

    (
        status,
        [(header::CACHE_CONTROL, "no-cache")],
        Html(shell.render(&body)),
    )
        .into_response()
}
