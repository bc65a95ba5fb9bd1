use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, Link, Loading, StatCard};
use crate::context::use_app;
use crate::format;
use crate::models::{Session, StudentOverview};
use crate::router::student_assignment_path;
use crate::toast::use_toasts;

#[component]
pub fn StudentDashboard(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let student_id = session.user_id.clone();
    let greeting = format!("Hi, {}", session.first_name());
    let (overview, set_overview) = signal::<Option<StudentOverview>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let student_id = student_id.clone();
        spawn_local(async move {
            match api.student_overview(&student_id).await {
                Ok(data) => set_overview.set(Some(data)),
                Err(e) => toasts.failed("Loading overview", &e),
            }
        });
    });

    view! {
        <section class="page dashboard">
            <h2 class="greeting">{greeting}</h2>
            {move || match overview.get() {
                None => view! { <Loading /> }.into_any(),
                Some(o) => view! {
                    <div class="stat-grid">
                        <StatCard label="Upcoming classes" value=o.upcoming_classes.len().to_string() icon="📅" />
                        <StatCard
                            label="To do"
                            value=o.pending_assignments.to_string()
                            icon="📝"
                            hint=format!("{} overdue", o.overdue_assignments)
                        />
                        <StatCard label="Average" value=format::optional_percent(o.average_percentage) icon="📊" />
                    </div>
                    {o.next_due.map(|a| {
                        let href = student_assignment_path(&a.id);
                        let detail = format!(" · {} · {}", a.subject, format::due_relative(a.due_on, today));
                        view! {
                            <div class="card next-due">
                                <h3>"Next due"</h3>
                                <Link href=href>{a.title}</Link>
                                <span class="muted">{detail}</span>
                            </div>
                        }
                    })}
                    <div class="card">
                        <h3>"Coming up"</h3>
                        {if o.upcoming_classes.is_empty() {
                            view! { <EmptyState message="No classes scheduled" icon="📅" /> }.into_any()
                        } else {
                            view! {
                                <ul class="upcoming-list">
                                    {o.upcoming_classes
                                        .iter()
                                        .map(|c| view! {
                                            <li>
                                                <strong>{c.title.clone()}</strong>
                                                <span class="muted">
                                                    {format!(
                                                        " · {} with {} · {}",
                                                        format::date_time(c.starts_at),
                                                        c.tutor_name,
                                                        c.location,
                                                    )}
                                                </span>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                        <div class="card-actions">
                            <Link href="/student/booking" class="btn btn-secondary">"Book a session"</Link>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
