//! Notifications Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{EmptyState, Loading};
use crate::context::use_app;
use crate::format;
use crate::models::{Notification, Session};
use crate::toast::use_toasts;

#[component]
pub fn Notifications(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let user_id = session.user_id;

    let (items, set_items) = signal::<Option<Vec<Notification>>>(None);

    Effect::new({
        let user_id = user_id.clone();
        move |_| {
            let _ = ctx.reload_trigger.get();
            let api = ctx.api();
            let user_id = user_id.clone();
            spawn_local(async move {
                match api.notifications_for(&user_id).await {
                    Ok(list) => set_items.set(Some(list)),
                    Err(e) => toasts.failed("Loading notifications", &e),
                }
            });
        }
    });

    let mark_read = move |id: String| {
        let api = ctx.api();
        spawn_local(async move {
            match api.mark_notification_read(&id).await {
                Ok(_) => ctx.reload(),
                Err(e) => toasts.failed("Marking notification", &e),
            }
        });
    };

    let mark_all = move |_| {
        let api = ctx.api();
        let user_id = user_id.clone();
        spawn_local(async move {
            match api.mark_all_notifications_read(&user_id).await {
                Ok(0) => toasts.info("Nothing new"),
                Ok(count) => {
                    info!(count, "notifications marked read");
                    toasts.success(format!("Marked {} as read", count));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Marking notifications", &e),
            }
        });
    };

    let has_unread = move || items.with(|list| list.as_ref().is_some_and(|l| l.iter().any(|n| !n.read)));

    view! {
        <section class="page notifications-page">
            <div class="page-toolbar">
                <button type="button" class="btn btn-secondary" disabled=move || !has_unread() on:click=mark_all>
                    "Mark all as read"
                </button>
            </div>
            {move || match items.get() {
                None => view! { <Loading /> }.into_any(),
                Some(list) if list.is_empty() => {
                    view! { <EmptyState message="You're all caught up" icon="🔔" /> }.into_any()
                }
                Some(list) => view! {
                    <ul class="notification-list">
                        {list
                            .into_iter()
                            .map(|n| {
                                let id = n.id.clone();
                                let unread = !n.read;
                                view! {
                                    <li class="notification" class:unread=unread>
                                        <span class="notification-icon">{n.kind.icon()}</span>
                                        <div class="notification-body">
                                            <strong>{n.title.clone()}</strong>
                                            <p>{n.body.clone()}</p>
                                            <span class="muted">{format::date_time(n.created_at)}</span>
                                        </div>
                                        <Show when=move || unread>
                                            <button
                                                type="button"
                                                class="btn btn-ghost btn-small"
                                                on:click={
                                                    let id = id.clone();
                                                    move |_| mark_read(id.clone())
                                                }
                                            >
                                                "Mark read"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
