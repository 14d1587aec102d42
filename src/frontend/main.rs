use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use quotos::site::{HeadMode, MOUNT_ID};

use crate::app::App;

mod app;
mod components;
mod navigation;
mod pages;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Take over the server-rendered mount point when present (served by
    // quotos-server); fall back to the body under `trunk serve`.
    match server_mount_point() {
        Some(root) => {
            let head = HeadMode::detect(true);
            leptos::mount::mount_to(root, move || view! { <App head/> }).forget()
        }
        None => {
            let head = HeadMode::detect(false);
            leptos::mount::mount_to_body(move || view! { <App head/> })
        }
    }
}

fn server_mount_point() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    let root = document.get_element_by_id(MOUNT_ID)?;
    root.set_inner_html("");
    root.dyn_into::<web_sys::HtmlElement>().ok()
}
