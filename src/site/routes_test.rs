use crate::site::error::SiteError;
use crate::site::routes::*;

#[test]
fn test_home_constant() {
    assert_eq!(RoutePath::HOME.as_str(), "/home");
    assert_eq!(RoutePath::HOME.to_string(), "/home");
}

#[test]
fn test_parse_accepts_relative_paths() {
    assert_eq!(RoutePath::parse("/home").unwrap(), RoutePath::HOME);
    assert_eq!(RoutePath::parse("/").unwrap(), RoutePath::ROOT);
    assert!(RoutePath::parse("/quotes/42?sort=new").is_ok());
}

#[test]
fn test_parse_rejects_missing_leading_slash() {
    let err = RoutePath::parse("home").unwrap_err();
    assert!(matches!(err, SiteError::InvalidRoutePath { .. }));
}

#[test]
fn test_parse_rejects_authority() {
    assert!(RoutePath::parse("//evil.example/home").is_err());
}

#[test]
fn test_parse_rejects_whitespace() {
    assert!(RoutePath::parse("/home page").is_err());
    assert!(RoutePath::parse("/home\n").is_err());
}

#[test]
fn test_parse_rejects_parent_segments() {
    assert!(RoutePath::parse("/images/../secret").is_err());
    // ".." inside a segment name is fine
    assert!(RoutePath::parse("/a..b").is_ok());
}

#[test]
fn test_resolve_known_routes() {
    assert_eq!(Route::resolve("/"), Some(Route::Welcome));
    assert_eq!(Route::resolve(""), Some(Route::Welcome));
    assert_eq!(Route::resolve("/home"), Some(Route::Home));
    assert_eq!(Route::resolve("/home/"), Some(Route::Home));
}

#[test]
fn test_resolve_unknown_route() {
    assert_eq!(Route::resolve("/homes"), None);
    assert_eq!(Route::resolve("/home/extra"), None);
}

#[test]
fn test_route_path_round_trip() {
    assert_eq!(Route::resolve(Route::Home.path().as_str()), Some(Route::Home));
    assert_eq!(
        Route::resolve(Route::Welcome.path().as_str()),
        Some(Route::Welcome)
    );
}
