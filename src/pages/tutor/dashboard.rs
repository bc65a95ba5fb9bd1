use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EmptyState, Link, Loading, StatCard};
use crate::context::use_app;
use crate::format;
use crate::models::{Session, TutorOverview};
use crate::router::tutor_class_path;
use crate::toast::use_toasts;

#[component]
pub fn TutorDashboard(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let tutor_id = session.user_id.clone();
    let greeting = format!("Welcome back, {}", session.first_name());
    let (overview, set_overview) = signal::<Option<TutorOverview>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let tutor_id = tutor_id.clone();
        spawn_local(async move {
            match api.tutor_overview(&tutor_id).await {
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
                        <StatCard label="Students" value=o.students.to_string() icon="🎓" />
                        <StatCard label="Waiting for a grade" value=o.to_grade.to_string() icon="📝" />
                        <StatCard label="Booking requests" value=o.pending_bookings.to_string() icon="📨" />
                    </div>
                    <div class="card">
                        <h2>"Next classes"</h2>
                        {if o.upcoming_classes.is_empty() {
                            view! { <EmptyState message="Nothing scheduled" icon="📅" /> }.into_any()
                        } else {
                            view! {
                                <ul class="upcoming-list">
                                    {o.upcoming_classes
                                        .iter()
                                        .map(|c| {
                                            let (href, title) = (tutor_class_path(&c.id), c.title.clone());
                                            let when = format!(" · {} · {}", format::date_time(c.starts_at), c.location);
                                            view! {
                                                <li>
                                                    <Link href=href>{title}</Link>
                                                    <span class="muted">{when}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                        <div class="card-actions">
                            <Link href="/tutor/assignments" class="btn btn-secondary">"Grade work"</Link>
                            <Link href="/tutor/students" class="btn btn-secondary">"Review bookings"</Link>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
