use crate::api::static_assets::*;
use axum::http::{StatusCode, header};

#[test]
fn test_empty_path_is_not_an_asset() {
    assert!(asset_response("").is_none());
}

#[test]
fn test_logo_is_served_as_png() {
    let response = asset_response("images/logo-placeholder.png").expect("logo should be embedded");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );
}

#[test]
fn test_stylesheet_is_served_as_css() {
    let response = asset_response("styles.css").expect("stylesheet should be embedded");
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
}

#[test]
fn test_unknown_asset_returns_none() {
    assert!(asset_response("images/missing.png").is_none());
    assert!(asset_response("home").is_none());
}

#[test]
fn test_shell_assets_always_link_stylesheet() {
    let assets = shell_assets();
    let document = crate::site::DocumentShell::new(Default::default(), assets).render("");
    assert!(document.contains(r#"<link rel="stylesheet" href="/styles.css">"#));
}
