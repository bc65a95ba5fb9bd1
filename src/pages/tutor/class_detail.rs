//! Class Detail
//!
//! Roster, linked assignments and a quick form for recording a grade
//! against one of the enrolled students.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{class_tone, EmptyState, Link, Loading, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::forms::{parse_score, submit_if_valid};
use crate::models::{Assignment, ClassSession, NewGrade, Role, Session, UserAccount};
use crate::pages::tables::AssignmentTable;
use crate::toast::use_toasts;

/// Everything the page shows, fetched together
#[derive(Debug, Clone, PartialEq)]
struct ClassView {
    class: ClassSession,
    students: Vec<UserAccount>,
    assignments: Vec<Assignment>,
}

#[component]
pub fn TutorClassDetail(session: Session, class_id: String) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let tutor_id = session.user_id;

    let (data, set_data) = signal::<Option<ClassView>>(None);
    let (missing, set_missing) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let (class_id, tutor_id) = (class_id.clone(), tutor_id.clone());
        spawn_local(async move {
            let class = match api.class_by_id(&class_id).await {
                Ok(class) if class.tutor_id == tutor_id => class,
                _ => {
                    set_missing.set(true);
                    return;
                }
            };
            let loaded = async {
                let people = api.users_by_role(Role::Student).await?;
                let assignments = api.assignments_for_tutor(&tutor_id).await?;
                Ok::<_, crate::models::DomainError>((people, assignments))
            }
            .await;
            match loaded {
                Ok((people, assignments)) => {
                    let students = people.into_iter().filter(|s| class.has_student(&s.id)).collect();
                    let assignments = assignments
                        .into_iter()
                        .filter(|a| a.class_id.as_deref() == Some(class.id.as_str()))
                        .collect();
                    set_data.set(Some(ClassView { class, students, assignments }));
                }
                Err(e) => toasts.failed("Loading class", &e),
            }
        });
    });

    view! {
        <section class="page class-detail">
            <Link href="/tutor/classes" class="back-link">"← All classes"</Link>
            {move || {
                if missing.get() {
                    return view! { <EmptyState message="This class isn't one of yours" icon="🔍" /> }.into_any();
                }
                let Some(ClassView { class, students, assignments }) = data.get() else {
                    return view! { <Loading /> }.into_any();
                };
                let roster = students.clone();
                view! {
                    <header class="detail-header">
                        <h2>{class.title.clone()}</h2>
                        <StatusBadge label=class.status.label() tone=class_tone(class.status) />
                        <p class="muted">
                            {format!(
                                "{} · {} – {} · {}",
                                class.subject,
                                format::date_time(class.starts_at),
                                format::time(class.ends_at()),
                                class.location,
                            )}
                        </p>
                    </header>
                    <div class="detail-columns">
                        <div class="card">
                            <h3>{format!("Students ({})", students.len())}</h3>
                            {if students.is_empty() {
                                view! { <EmptyState message="No students enrolled" icon="🎓" /> }.into_any()
                            } else {
                                view! {
                                    <ul class="roster">
                                        {students
                                            .into_iter()
                                            .map(|s| view! {
                                                <li>
                                                    <img class="avatar avatar-small" src=s.avatar.clone() alt="" />
                                                    <span>{s.name.clone()}</span>
                                                    <span class="muted">{s.email.clone()}</span>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_any()
                            }}
                        </div>
                        <div class="card">
                            <h3>"Record a grade"</h3>
                            <GradeForm students=roster subject=class.subject.clone() />
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Assignments"</h3>
                        <AssignmentTable assignments=assignments today=today />
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn GradeForm(students: Vec<UserAccount>, subject: String) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let student_id = RwSignal::new(String::new());
    let assessment = RwSignal::new(String::new());
    let score = RwSignal::new(String::new());
    let max_score = RwSignal::new("100".to_string());
    let subject = StoredValue::new(subject);
    let (saving, set_saving) = signal(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (student_value, assessment_value, score_value, max_value) =
            (student_id.get(), assessment.get(), score.get(), max_score.get());
        let submitted = submit_if_valid(
            &[
                ("Student", &student_value),
                ("Assessment", &assessment_value),
                ("Score", &score_value),
                ("Out of", &max_value),
            ],
            || {
                let max_num = parse_score("Out of", &max_value, u32::MAX)?;
                let new_grade = NewGrade {
                    student_id: student_value.clone(),
                    subject: subject.get_value(),
                    assessment: assessment_value.clone(),
                    score: parse_score("Score", &score_value, max_num)?,
                    max_score: max_num,
                    recorded_on: None,
                };
                set_saving.set(true);
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.record_grade(&new_grade).await;
                    set_saving.set(false);
                    match result {
                        Ok(grade) => {
                            info!(grade = %grade.id, student = %grade.student_id, "grade recorded");
                            toasts.success(format!("Recorded {} ({})", grade.assessment, format::percent(grade.percentage())));
                            assessment.set(String::new());
                            score.set(String::new());
                            ctx.reload();
                        }
                        Err(e) => toasts.failed("Recording grade", &e),
                    }
                });
                Ok(())
            },
        );
        if let Err(e) = submitted {
            toasts.error(e.to_string());
        }
    };

    view! {
        <form class="form form-compact" on:submit=save>
            <select prop:value=move || student_id.get() on:change=move |ev| student_id.set(event_target_value(&ev))>
                <option value="">"Choose a student"</option>
                {students
                    .into_iter()
                    .map(|s| view! { <option value=s.id.clone()>{s.name.clone()}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                placeholder="Assessment, e.g. Quiz 3"
                prop:value=move || assessment.get()
                on:input=move |ev| assessment.set(event_target_value(&ev))
            />
            <div class="field-row">
                <input
                    type="number"
                    min="0"
                    placeholder="Score"
                    prop:value=move || score.get()
                    on:input=move |ev| score.set(event_target_value(&ev))
                />
                <span class="muted">"out of"</span>
                <input
                    type="number"
                    min="1"
                    prop:value=move || max_score.get()
                    on:input=move |ev| max_score.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Record grade" }}
            </button>
        </form>
    }
}
