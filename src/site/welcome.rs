//! The welcome (splash) screen.
//!
//! A centered logo plus a single "Enter App" control. Activating the control
//! asks the injected [`Navigator`] to move to `/home`; nothing else happens.

use super::html::escape;
use super::navigation::Navigator;
use super::routes::RoutePath;

pub const PAGE_ID: &str = "page-welcome";
pub const PAGE_CLASS: &str = "pageWelcome";
pub const CENTER_ID: &str = "welcome-center";
pub const CENTER_CLASS: &str = "welcomeCenter";
pub const LOGO_ID: &str = "welcome-logo";
pub const LOGO_CLASS: &str = "welcomeLogo";
pub const LOGO_SRC: &str = "/images/logo-placeholder.png";
pub const LOGO_ALT: &str = "Quotos Logo";
pub const BUTTON_ID: &str = "enter-app-button";
pub const BUTTON_CLASS: &str = "enterAppButton";
pub const BUTTON_LABEL: &str = "Enter App";

/// Welcome screen bound to a navigation capability.
///
/// Holds no state of its own. Rendering never touches the navigator.
pub struct WelcomeScreen<N: Navigator> {
    navigator: N,
}

impl<N: Navigator> WelcomeScreen<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Destination of the "Enter App" control.
    pub fn target(&self) -> RoutePath {
        RoutePath::HOME
    }

    /// Handle one activation of the "Enter App" control.
    ///
    /// Issues exactly one navigation request per call. No debouncing.
    pub fn enter_app(&self) {
        self.navigator.navigate(&self.target());
    }

    /// Server-rendered markup, see [`markup`].
    pub fn render(&self) -> String {
        markup()
    }
}

/// Server-rendered welcome markup.
///
/// The button sits in a GET form aimed at `/home` so it still navigates when
/// the client bundle is not loaded. Exactly one image and one button.
pub fn markup() -> String {
    format!(
        concat!(
            r#"<main id="{page_id}" class="{page_class}">"#,
            r#"<div id="{center_id}" class="{center_class}">"#,
            r#"<img id="{logo_id}" class="{logo_class}" src="{logo_src}" alt="{logo_alt}">"#,
            r#"<form action="{target}" method="get">"#,
            r#"<button id="{button_id}" class="{button_class}" type="submit">{label}</button>"#,
            "</form>",
            "</div>",
            "</main>"
        ),
        page_id = PAGE_ID,
        page_class = PAGE_CLASS,
        center_id = CENTER_ID,
        center_class = CENTER_CLASS,
        logo_id = LOGO_ID,
        logo_class = LOGO_CLASS,
        logo_src = LOGO_SRC,
        logo_alt = escape(LOGO_ALT),
        target = RoutePath::HOME,
        button_id = BUTTON_ID,
        button_class = BUTTON_CLASS,
        label = escape(BUTTON_LABEL),
    )
}
