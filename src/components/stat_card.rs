//! Dashboard stat tile

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] icon: &'static str,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-icon">{icon}</span>
            <div class="stat-body">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{label}</span>
                {hint.map(|h| view! { <span class="stat-hint">{h}</span> })}
            </div>
        </div>
    }
}
