//! Site error types.
//!
//! Construction-time validation errors for page metadata and route paths.
//! Rendering itself never fails.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building site configuration values.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Invalid page metadata: {field} must not be empty")]
    #[diagnostic(
        code(quotos::site::invalid_metadata),
        help("Page metadata is emitted into the document head and must carry visible text.")
    )]
    InvalidMetadata { field: &'static str },

    #[error("Invalid route path '{path}': {reason}")]
    #[diagnostic(
        code(quotos::site::invalid_route_path),
        help("Route paths are root-anchored relative paths such as /home")
    )]
    InvalidRoutePath { path: String, reason: &'static str },
}

/// Result type for site configuration.
pub type SiteResult<T> = Result<T, SiteError>;
