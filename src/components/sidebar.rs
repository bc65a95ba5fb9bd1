//! Portal Sidebar
//!
//! Renders the role's nav sections with live badges and the active item lit.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::{use_app, use_navigator};
use crate::models::Role;
use crate::nav::{badge_count, badge_label, is_active, sections_for, NavItem};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let ctx = use_app();
    let app_name = ctx.config().app_name;

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-mark">"🎓"</span>
                <span class="brand-name">{app_name}</span>
                <span class="brand-portal">{role.label()}</span>
            </div>
            <nav class="sidebar-nav">
                {sections_for(role)
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="nav-section">
                                <h3 class="nav-section-title">{section.title}</h3>
                                {section.items.iter().map(|item| view! { <NavLink item=*item /> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let navigator = use_navigator();
    let store = use_app_store();

    let active = move || is_active(item.route, &navigator.path());
    let badge = move || {
        let source = item.badge?;
        let count = store.activity().with(|counts| badge_count(source, counts));
        badge_label(count)
    };

    view! {
        <div class=move || if active() { "nav-item active" } else { "nav-item" }>
            <Link href=item.route class="nav-link">
                <span class="nav-icon">{item.icon}</span>
                <span class="nav-label">{item.label}</span>
                {move || badge().map(|text| view! { <span class="nav-badge">{text}</span> })}
            </Link>
        </div>
    }
}
