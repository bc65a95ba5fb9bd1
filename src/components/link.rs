//! Client-side Link
//!
//! A real `<a href>` so middle-click and copy-link still work; plain left
//! clicks are routed through the navigator instead of reloading the page.

use leptos::prelude::*;

use crate::context::use_navigator;

#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        navigator.push(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
