use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Link, Loading, StatCard};
use crate::context::use_app;
use crate::format::format_cents;
use crate::models::AdminOverview;
use crate::toast::use_toasts;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let (overview, set_overview) = signal::<Option<AdminOverview>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.admin_overview().await {
                Ok(data) => set_overview.set(Some(data)),
                Err(e) => toasts.failed("Loading overview", &e),
            }
        });
    });

    view! {
        <section class="page dashboard">
            {move || match overview.get() {
                None => view! { <Loading /> }.into_any(),
                Some(o) => view! {
                    <div class="stat-grid">
                        <StatCard label="Active users" value=o.active_users.to_string() icon="👥"
                            hint=format!("{} suspended", o.suspended_users) />
                        <StatCard label="Scheduled classes" value=o.scheduled_classes.to_string() icon="📅" />
                        <StatCard label="Collected" value=format_cents(o.collected_cents) icon="💰" />
                        <StatCard label="Outstanding" value=format_cents(o.outstanding_cents) icon="🧾"
                            hint=format!("{} overdue", o.overdue_invoices) />
                    </div>
                    <div class="card">
                        <h2>"Accounts by role"</h2>
                        <ul class="role-breakdown">
                            {o.users_by_role
                                .iter()
                                .map(|(role, count)| view! {
                                    <li>
                                        <span>{role.label()}</span>
                                        <strong>{*count}</strong>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                        <div class="card-actions">
                            <Link href="/admin/users" class="btn btn-secondary">"Manage users"</Link>
                            <Link href="/admin/billing" class="btn btn-secondary">"Review billing"</Link>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
