use leptos::prelude::*;

use crate::components::Link;

#[component]
pub fn NotFound(home: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <Link href=home class="btn btn-primary">"Back to dashboard"</Link>
        </section>
    }
}
