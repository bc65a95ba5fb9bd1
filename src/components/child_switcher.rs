//! Active-child picker for the parent portal

use leptos::prelude::*;
use tracing::info;

use crate::store::{store_select_child, use_app_store, AppStateStoreFields};

#[component]
pub fn ChildSwitcher() -> impl IntoView {
    let store = use_app_store();
    let children = move || store.parent().with(|p| p.children().to_vec());
    let active_id = move || store.parent().with(|p| p.active_id()).unwrap_or_default();

    let on_change = move |ev: web_sys::Event| {
        let child_id = event_target_value(&ev);
        if store_select_child(&store, &child_id) {
            info!(child = %child_id, "active child changed");
        }
    };

    view! {
        <Show when=move || store.parent().with(|p| !p.children().is_empty())>
            <label class="child-switcher">
                <span>"Viewing"</span>
                <select on:change=on_change prop:value=active_id>
                    {move || {
                        children()
                            .into_iter()
                            .map(|child| {
                                let selected = child.id == active_id();
                                view! {
                                    <option value=child.id.clone() selected=selected>
                                        {format!("{} ({})", child.name, child.grade)}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
        </Show>
    }
}
