//! Client-side navigation capability.
//!
//! The welcome page never reaches for a global router. It receives a
//! [`Navigator`] and hands the destination over, fire-and-forget.

use super::routes::RoutePath;

#[cfg(test)]
use mockall::automock;

/// Something that can move the user interface to another route.
///
/// Implementations own the transition entirely: callers do not await it and
/// do not observe failures.
#[cfg_attr(test, automock)]
pub trait Navigator {
    /// Request a transition to `path`.
    fn navigate(&self, path: &RoutePath);
}
