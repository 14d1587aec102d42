//! Application route paths.

use std::borrow::Cow;
use std::fmt;

use super::error::{SiteError, SiteResult};

/// A root-anchored relative path such as `/home`.
///
/// Never carries a scheme or authority, whitespace, or `..` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// The welcome page.
    pub const ROOT: RoutePath = RoutePath(Cow::Borrowed("/"));

    /// Destination of the "Enter App" control.
    pub const HOME: RoutePath = RoutePath(Cow::Borrowed("/home"));

    /// Validate and wrap a path.
    pub fn parse(path: impl Into<String>) -> SiteResult<Self> {
        let path = path.into();

        let reason = if !path.starts_with('/') {
            Some("must start with '/'")
        } else if path.starts_with("//") {
            Some("must not name a host")
        } else if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Some("must not contain whitespace")
        } else if path.split('/').any(|segment| segment == "..") {
            Some("must not contain '..' segments")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SiteError::InvalidRoutePath { path, reason }),
            None => Ok(Self(Cow::Owned(path))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pages the application knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Home,
}

impl Route {
    /// Map a request path to a page. A trailing slash is ignored except on the root.
    pub fn resolve(path: &str) -> Option<Route> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        if trimmed == RoutePath::ROOT.as_str() {
            Some(Route::Welcome)
        } else if trimmed == RoutePath::HOME.as_str() {
            Some(Route::Home)
        } else {
            None
        }
    }

    pub fn path(&self) -> RoutePath {
        match self {
            Route::Welcome => RoutePath::ROOT,
            Route::Home => RoutePath::HOME,
        }
    }
}
