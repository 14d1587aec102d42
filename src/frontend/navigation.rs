//! Router-backed navigation capability.

use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use quotos::site::{Navigator, RoutePath};

/// Adapts a `leptos_router` navigate function to [`Navigator`].
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F: Fn(&str, NavigateOptions)> RouterNavigator<F> {
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &RoutePath) {
        (self.navigate)(path.as_str(), NavigateOptions::default());
    }
}

/// Navigator for the enclosing `<Router>`. Must be called inside it.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone> {
    RouterNavigator::new(use_navigate())
}
