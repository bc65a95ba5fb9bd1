//! Brightpath Portal App
//!
//! Root component: provides the shared contexts, runs the route guard on
//! every navigation and keeps session-scoped data (children, badges) fresh.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{debug, info};

use crate::components::{Loading, ToastHost};
use crate::config::AppConfig;
use crate::context::{AppContext, Navigator};
use crate::models::{MockBackend, Role};
use crate::pages::{render_not_found, render_route};
use crate::router::{resolve, Resolution};
use crate::store::{store_is_signed_in_as, store_set_activity, store_set_children_for, AppState, AppStateStoreFields};
use crate::toast::Toasts;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = MockBackend::seeded()
        .with_latency(config.latency_profile())
        .with_today(config.today());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let toasts = Toasts::new(config.toast_timeout_ms);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), api, config);
    let navigator = Navigator::from_location();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(navigator);
    provide_context(store);
    provide_context(toasts);

    let role = Memo::new(move |_| store.session().with(|s| s.as_ref().map(|s| s.role)));
    let resolution = Memo::new(move |_| resolve(&navigator.path(), role.get()));

    // Guard: follow redirects without adding history entries
    Effect::new(move |_| {
        if let Resolution::Redirect(to) = resolution.get() {
            info!(from = %navigator.path_signal().get_untracked(), to = %to, "redirect");
            navigator.replace(&to);
        }
    });

    // Parent portal: load the children once per sign-in
    Effect::new(move |_| {
        let Some(session) = store.session().get() else { return };
        if session.role != Role::Parent {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.children_for_parent(&session.user_id).await {
                Ok(children) => {
                    let count = children.len();
                    if store_set_children_for(&store, &session.user_id, children) {
                        info!(parent = %session.user_id, count, "children loaded");
                    } else {
                        debug!(parent = %session.user_id, "dropping children for a signed-out parent");
                    }
                }
                Err(e) => toasts.failed("Loading children", &e),
            }
        });
    });

    // Sidebar badges and the bell follow every write
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some((user_id, role)) = store.session().with(|s| s.as_ref().map(|s| (s.user_id.clone(), s.role))) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api.activity_counts(&user_id, role).await {
                Ok(counts) => {
                    if store_is_signed_in_as(&store, &user_id) {
                        debug!(?counts, "activity counts");
                        store_set_activity(&store, counts);
                    }
                }
                Err(e) => toasts.failed("Loading activity", &e),
            }
        });
    });

    view! {
        {move || match resolution.get() {
            Resolution::Render(found) => render_route(found, store.session().get()),
            Resolution::NotFound => render_not_found(store.session().get()),
            Resolution::Redirect(_) => view! { <Loading /> }.into_any(),
        }}
        <ToastHost />
    }
}
