//! Modal Dialog
//!
//! Callers wrap it in `<Show>`; the modal itself only renders the frame.

use leptos::prelude::*;

#[component]
pub fn Modal(#[prop(into)] title: String, #[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="modal-close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
