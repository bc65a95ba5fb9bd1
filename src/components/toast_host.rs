//! Renders the toast queue in the corner of the screen

use leptos::prelude::*;

use crate::toast::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let queue = toasts.queue();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                let:toast
            >
                <div class=toast.kind.class()>
                    <span class="toast-text">{toast.text.clone()}</span>
                    <button type="button" class="toast-close" on:click=move |_| toasts.dismiss(toast.id)>
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
