//! Integration tests for the server router.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::site::{DocumentShell, PageMetadata, ShellAssets};

/// Create a test app without a client bundle
fn test_app() -> axum::Router {
    let shell = DocumentShell::new(
        PageMetadata::default(),
        ShellAssets::new().with_stylesheet("/styles.css"),
    );
    routes::create_router(AppState::new(shell))
}

async fn get(uri: &str) -> axum::response::Response {
    test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn text_body(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn root_renders_welcome_page_in_shell() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

    let html = text_body(response).await;
    assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en">"#));
    assert!(html.contains("<title>Quotos</title>"));
    assert!(html.contains("A platform that unites users through philosophical ideas and thoughts"));
    assert!(html.contains(r#"<div id="quotos-root"><main id="page-welcome""#));
    assert_eq!(html.matches("<img").count(), 1);
    assert_eq!(html.matches("<button").count(), 1);
    assert!(html.contains(">Enter App</button>"));
}

#[tokio::test]
async fn home_renders_landing_page() {
    let response = get("/home").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = text_body(response).await;
    assert!(html.contains(r#"id="page-home""#));
    assert!(html.contains("<title>Quotos</title>"));
}

#[tokio::test]
async fn welcome_button_submits_to_home_without_bundle() {
    let html = text_body(get("/").await).await;

    let form = html
        .find(r#"<form action="/home" method="get">"#)
        .expect("button should be wrapped in a GET form aimed at /home");
    let button = html.find(r#"<button id="enter-app-button""#).unwrap();
    let form_end = html.find("</form>").unwrap();
    assert!(form < button && button < form_end);
    assert_eq!(html.matches("<form").count(), 1);
}

#[tokio::test]
async fn unknown_page_returns_404_in_shell() {
    let response = get("/quotes/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = text_body(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("<title>Quotos</title>"));
}

#[tokio::test]
async fn api_prefix_returns_empty_404() {
    let response = get("/api/v1/quotes").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(text_body(response).await.is_empty());
}

#[tokio::test]
async fn post_to_page_is_rejected() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Assets and system
// =============================================================================

#[tokio::test]
async fn logo_is_served() {
    let response = get("/images/logo-placeholder.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
}

#[tokio::test]
async fn health_returns_ok() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = text_body(response).await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn docs_serves_api_reference() {
    let response = get("/docs").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = text_body(response).await;
    assert!(!html.contains("Page not found"));
    assert!(!html.contains(r#"id="quotos-root""#));
}

#[test]
fn openapi_document_describes_health() {
    use utoipa::OpenApi;

    let doc = routes::ApiDoc::openapi();
    assert!(doc.paths.paths.contains_key("/health"));
    assert_eq!(doc.info.title, "Quotos");
}
