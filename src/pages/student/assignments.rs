//! Student Assignments
//!
//! The list with status tabs, and a detail page where pending work is
//! handed in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{assignment_tone, EmptyState, FilterTabs, Link, Loading, MarkdownView, StatusBadge};
use crate::context::use_app;
use crate::filter::AssignmentFilter;
use crate::format;
use crate::models::{Assignment, AssignmentStatus, Session};
use crate::pages::tables::AssignmentTable;
use crate::toast::use_toasts;

#[component]
pub fn StudentAssignments(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let student_id = session.user_id;

    let (assignments, set_assignments) = signal::<Option<Vec<Assignment>>>(None);
    let status = RwSignal::new(AssignmentFilter::All);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let student_id = student_id.clone();
        spawn_local(async move {
            match api.assignments_for_student(&student_id).await {
                Ok(list) => set_assignments.set(Some(list)),
                Err(e) => toasts.failed("Loading assignments", &e),
            }
        });
    });

    view! {
        <section class="page assignments-page">
            <div class="page-toolbar">
                <FilterTabs options=AssignmentFilter::ALL.to_vec() label=AssignmentFilter::label selected=status />
            </div>
            {move || {
                let filter = status.get();
                match assignments.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(list) => {
                        let list: Vec<_> = list.into_iter().filter(|a| filter.matches(a, today)).collect();
                        view! { <AssignmentTable assignments=list today=today link_detail=true /> }.into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
pub fn StudentAssignmentDetail(session: Session, assignment_id: String) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let student_id = StoredValue::new(session.user_id);

    let (assignment, set_assignment) = signal::<Option<Assignment>>(None);
    let (missing, set_missing) = signal(false);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let (id, student_id) = (assignment_id.clone(), student_id.get_value());
        spawn_local(async move {
            match api.assignment_by_id(&id).await {
                Ok(a) if a.student_id == student_id => set_assignment.set(Some(a)),
                _ => set_missing.set(true),
            }
        });
    });

    let submit = move |id: String| {
        set_submitting.set(true);
        let api = ctx.api();
        let student_id = student_id.get_value();
        spawn_local(async move {
            let result = api.submit_assignment(&id, &student_id).await;
            set_submitting.set(false);
            match result {
                Ok(a) => {
                    info!(assignment = %a.id, "assignment handed in");
                    toasts.success(format!("Handed in \"{}\"", a.title));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Submitting", &e),
            }
        });
    };

    view! {
        <section class="page assignment-detail">
            <Link href="/student/assignments" class="back-link">"← All assignments"</Link>
            {move || {
                if missing.get() {
                    return view! { <EmptyState message="Assignment not found" icon="🔍" /> }.into_any();
                }
                let Some(a) = assignment.get() else {
                    return view! { <Loading /> }.into_any();
                };
                let overdue = a.is_overdue(today);
                let status_label = if overdue { "Overdue" } else { a.status.label() };
                let pending = a.status == AssignmentStatus::Pending;
                let id = a.id.clone();
                view! {
                    <header class="detail-header">
                        <h2>{a.title.clone()}</h2>
                        <StatusBadge label=status_label tone=assignment_tone(a.status, overdue) />
                        <p class="muted">
                            {format!(
                                "{} · due {} ({})",
                                a.subject,
                                format::date(a.due_on),
                                format::due_relative(a.due_on, today),
                            )}
                        </p>
                    </header>
                    <div class="card">
                        <MarkdownView text=a.description.clone() />
                    </div>
                    {a.score.map(|score| view! {
                        <div class="card score-card">
                            <span class="stat-value">{format!("{} / {}", score, a.max_score)}</span>
                            <span class="stat-label">"Your score"</span>
                        </div>
                    })}
                    <Show when=move || pending>
                        <div class="form-actions">
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                                on:click={
                                    let id = id.clone();
                                    move |_| submit(id.clone())
                                }
                            >
                                {move || if submitting.get() { "Handing in..." } else { "Hand in" }}
                            </button>
                        </div>
                    </Show>
                }
                .into_any()
            }}
        </section>
    }
}
