use leptos::prelude::*;
use leptos_meta::{Html, Meta, Title};

use quotos::site::{HeadMode, PageMetadata};

/// Document frame: language, title and description, then the page content.
///
/// Head tags are only declared when the server did not already write them.
#[component]
pub fn Shell(metadata: PageMetadata, head: HeadMode, children: Children) -> impl IntoView {
    let lang = metadata.lang().to_string();
    let title = metadata.title().to_string();
    let description = metadata.description().to_string();

    view! {
        {head
            .client_declares_metadata()
            .then(|| {
                view! {
                    <Html attr:lang=lang />
                    <Title text=title />
                    <Meta name="description" content=description />
                }
            })}
        {children()}
    }
}
