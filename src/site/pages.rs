//! Server-rendered page bodies keyed by route.

use super::html::escape;
use super::metadata::PageMetadata;
use super::routes::{Route, RoutePath};
use super::welcome;

pub const HOME_ID: &str = "page-home";
pub const HOME_CLASS: &str = "pageHome";
pub const NOT_FOUND_ID: &str = "page-not-found";

/// Render the body content for a resolved route, or the not-found page.
pub fn render(route: Option<Route>, metadata: &PageMetadata) -> String {
    match route {
        Some(Route::Welcome) => welcome::markup(),
        Some(Route::Home) => home_markup(metadata),
        None => not_found_markup(),
    }
}

/// Landing view at `/home`.
pub fn home_markup(metadata: &PageMetadata) -> String {
    format!(
        r#"<main id="{HOME_ID}" class="{HOME_CLASS}"><h1>{}</h1><p>{}</p><a href="{}">Back to start</a></main>"#,
        escape(metadata.title()),
        escape(metadata.description()),
        RoutePath::ROOT,
    )
}

pub fn not_found_markup() -> String {
    format!(
        r#"<main id="{NOT_FOUND_ID}"><p>Page not found</p><a href="{}">Back to start</a></main>"#,
        RoutePath::ROOT
    )
}
