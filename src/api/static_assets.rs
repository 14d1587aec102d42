//! Embedded static assets.
//!
//! In release mode: assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from the filesystem at runtime.

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::{debug, info};

use crate::site::ShellAssets;

/// Stylesheet linked from every document head.
pub const STYLESHEET: &str = "/styles.css";
/// wasm-bindgen glue emitted by Trunk (file hashing disabled in Trunk.toml).
pub const BUNDLE_JS: &str = "quotos-frontend.js";
pub const BUNDLE_WASM: &str = "quotos-frontend_bg.wasm";

/// Hand-maintained assets: logo image and stylesheet.
#[derive(RustEmbed)]
#[folder = "public/"]
#[include = "*.css"]
#[include = "images/**/*"]
struct PublicAssets;

/// Trunk output. May be absent when only the server was built.
#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "snippets/**/*"]
struct FrontendAssets;

/// Look up an embedded asset by request path (without the leading slash).
///
/// Public assets get a one hour cache; the unhashed client bundle is revalidated.
pub fn asset_response(path: &str) -> Option<Response> {
    if path.is_empty() {
        return None;
    }

    let (content, cache) = match PublicAssets::get(path) {
        Some(content) => (content, "public, max-age=3600"),
        None => (FrontendAssets::get(path)?, "no-cache"),
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    debug!(path, mime = %mime, "serving embedded asset");

    Some(
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (header::CACHE_CONTROL, cache.to_string()),
            ],
            Body::from(content.data),
        )
            .into_response(),
    )
}

/// Head assets for the document shell, including the client bundle when built.
pub fn shell_assets() -> ShellAssets {
    let assets = ShellAssets::new().with_stylesheet(STYLESHEET);

    if FrontendAssets::get(BUNDLE_JS).is_some() && FrontendAssets::get(BUNDLE_WASM).is_some() {
        info!("Client bundle found, pages will mount the frontend");
        assets.with_wasm_bundle(format!("/{BUNDLE_JS}"), format!("/{BUNDLE_WASM}"))
    } else {
        info!("No client bundle in dist/, serving server-rendered pages only");
        assets
    }
}
