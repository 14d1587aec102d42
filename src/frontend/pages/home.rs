use leptos::prelude::*;
use leptos_router::components::A;

use quotos::site::PageMetadata;
use quotos::site::pages::{HOME_CLASS, HOME_ID};

#[component]
pub fn HomePage() -> impl IntoView {
    let metadata = PageMetadata::default();

    view! {
        <main id=HOME_ID class=HOME_CLASS>
            <h1>{metadata.title().to_string()}</h1>
            <p>{metadata.description().to_string()}</p>
            <A href="/">"Back to start"</A>
        </main>
    }
}
