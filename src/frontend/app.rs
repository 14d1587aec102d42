use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use quotos::site::{HeadMode, PageMetadata};

use crate::components::Shell;
use crate::pages::{HomePage, WelcomePage};

#[component]
pub fn App(head: HeadMode) -> impl IntoView {
    provide_meta_context();
    let metadata = PageMetadata::default();

    view! {
        <Shell metadata head>
            <Router>
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=WelcomePage/>
                    <Route path=path!("/home") view=HomePage/>
                </Routes>
            </Router>
        </Shell>
    }
}
