use leptos::prelude::*;

use super::{active_child_name, use_child_data, ChildData, NoChildren};
use crate::components::{Link, Loading, StatCard};
use crate::format;
use crate::models::ChildOverview;

#[component]
pub fn ParentDashboard() -> impl IntoView {
    let ChildData { child_id, data } =
        use_child_data("Loading overview", |api, id| async move { api.child_overview(&id).await });
    let child_name = active_child_name();

    view! {
        <section class="page dashboard">
            {move || match (child_id.get(), data.get()) {
                (None, _) => view! { <NoChildren /> }.into_any(),
                (_, None) => view! { <Loading /> }.into_any(),
                (Some(_), Some(o)) => overview_view(o, child_name.get()),
            }}
        </section>
    }
}

fn overview_view(o: ChildOverview, child_name: String) -> AnyView {
    view! {
        <h2 class="greeting">{format!("How {} is doing", child_name)}</h2>
        <div class="stat-grid">
            <StatCard label="Upcoming classes" value=o.upcoming_classes.to_string() icon="📅" />
            <StatCard
                label="Open assignments"
                value=o.pending_assignments.to_string()
                icon="📝"
                hint=format!("{} overdue", o.overdue_assignments)
            />
            <StatCard label="Average" value=format::optional_percent(o.average_percentage) icon="📊" />
            <StatCard label="Balance due" value=format::format_cents(o.unpaid_cents) icon="💳" />
        </div>
        <div class="card">
            <h3>"Next class"</h3>
            {match o.next_class {
                Some(c) => view! {
                    <p>
                        <strong>{c.title.clone()}</strong>
                        <span class="muted">
                            {format!(" · {} with {} · {}", format::date_time(c.starts_at), c.tutor_name, c.location)}
                        </span>
                    </p>
                }
                .into_any(),
                None => view! { <p class="muted">"Nothing scheduled"</p> }.into_any(),
            }}
            <div class="card-actions">
                <Link href="/parent/assignments" class="btn btn-secondary">"See assignments"</Link>
                <Link href="/parent/billing" class="btn btn-secondary">"Pay invoices"</Link>
            </div>
        </div>
    }
    .into_any()
}
