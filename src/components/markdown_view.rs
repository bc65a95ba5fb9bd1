//! Rendered markdown block

use leptos::prelude::*;

use crate::markdown;

#[component]
pub fn MarkdownView(#[prop(into)] text: String) -> impl IntoView {
    let rendered_html = markdown::render(&text);
    view! { <div class="markdown-body" inner_html=rendered_html></div> }
}
