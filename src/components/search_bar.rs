//! Search box and filter tabs for table pages

use leptos::prelude::*;

#[component]
pub fn SearchBar(value: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.with(|v| v.is_empty())>
                <button type="button" class="search-clear" title="Clear" on:click=move |_| value.set(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}

/// Row of toggle buttons, one per option
#[component]
pub fn FilterTabs<T>(options: Vec<T>, label: fn(&T) -> &'static str, selected: RwSignal<T>) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="filter-tabs">
            {options
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class=move || if selected.get() == option { "filter-tab active" } else { "filter-tab" }
                            on:click=move |_| selected.set(option)
                        >
                            {label(&option)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
