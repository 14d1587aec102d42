use leptos::prelude::*;

use quotos::site::WelcomeScreen;
use quotos::site::welcome::{
    BUTTON_CLASS, BUTTON_ID, BUTTON_LABEL, CENTER_CLASS, CENTER_ID, LOGO_ALT, LOGO_CLASS, LOGO_ID,
    LOGO_SRC, PAGE_CLASS, PAGE_ID,
};

use crate::navigation::use_router_navigator;

#[component]
pub fn WelcomePage() -> impl IntoView {
    let screen = WelcomeScreen::new(use_router_navigator());

    view! {
        <main id=PAGE_ID class=PAGE_CLASS>
            <div id=CENTER_ID class=CENTER_CLASS>
                <img id=LOGO_ID class=LOGO_CLASS src=LOGO_SRC alt=LOGO_ALT />
                <button id=BUTTON_ID class=BUTTON_CLASS on:click=move |_| screen.enter_app()>
                    {BUTTON_LABEL}
                </button>
            </div>
        </main>
    }
}
