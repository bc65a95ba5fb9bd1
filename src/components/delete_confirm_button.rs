//! Delete Confirm Button Component
//!
//! Reusable inline confirmation for destructive actions.

use leptos::prelude::*;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, asks "Sure?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Text of the initial button (e.g. "Delete" or "Suspend")
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] button_class: Option<String>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let button_class = button_class.unwrap_or_else(|| "btn btn-danger btn-small".to_string());

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Sure?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    title="Confirm"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    title="Cancel"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
