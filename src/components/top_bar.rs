//! Portal Top Bar
//!
//! Page heading, notification bell with unread count, the signed-in user
//! and sign out.

use leptos::prelude::*;
use tracing::info;

use crate::components::{ChildSwitcher, Link};
use crate::context::use_navigator;
use crate::models::{Role, Session};
use crate::nav::{badge_label, title_for};
use crate::router::{portal_path, SIGN_IN};
use crate::store::{store_sign_out, use_app_store, AppStateStoreFields};
use crate::toast::use_toasts;

#[component]
pub fn TopBar(session: Session) -> impl IntoView {
    let navigator = use_navigator();
    let store = use_app_store();
    let toasts = use_toasts();
    let role = session.role;

    let title = move || title_for(role, &navigator.path()).unwrap_or("My Profile");
    let unread = move || store.activity().with(|counts| badge_label(counts.unread_notifications));

    let sign_out = move |_| {
        info!("signed out");
        store_sign_out(&store);
        navigator.replace(SIGN_IN);
        toasts.info("You have been signed out");
    };

    let initials = session.initials();
    let avatar = session.avatar.clone();

    view! {
        <header class="top-bar">
            <h1 class="top-bar-title">{title}</h1>
            <div class="top-bar-actions">
                <Show when=move || role == Role::Parent>
                    <ChildSwitcher />
                </Show>
                <Link href=portal_path(role, "notifications") class="bell">
                    "🔔"
                    {move || unread().map(|text| view! { <span class="bell-count">{text}</span> })}
                </Link>
                <Link href="/profile" class="top-bar-user">
                    {if avatar.is_empty() {
                        view! { <span class="avatar avatar-initials">{initials.clone()}</span> }.into_any()
                    } else {
                        view! { <img class="avatar" src=avatar.clone() alt="" /> }.into_any()
                    }}
                    <span class="top-bar-name">{session.name.clone()}</span>
                </Link>
                <button type="button" class="btn btn-ghost" on:click=sign_out>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
