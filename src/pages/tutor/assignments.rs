//! Tutor Assignments
//!
//! Everything this tutor has set, with a dialog to set new work and one to
//! grade submissions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::pages::{name_or_id, names_by_id};
use crate::components::{assignment_tone, EmptyState, FilterTabs, Loading, Modal, SearchBar, StatusBadge};
use crate::context::use_app;
use crate::filter::{matches_query, AssignmentFilter};
use crate::format;
use crate::forms::{parse_date, parse_score, submit_if_valid};
use crate::models::{Assignment, AssignmentStatus, ClassSession, NewAssignment, Role, Session, UserAccount};
use crate::toast::use_toasts;

#[component]
pub fn TutorAssignments(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let tutor_id = StoredValue::new(session.user_id);

    let (assignments, set_assignments) = signal::<Option<Vec<Assignment>>>(None);
    let (students, set_students) = signal(Vec::<UserAccount>::new());
    let status = RwSignal::new(AssignmentFilter::All);
    let query = RwSignal::new(String::new());
    let creating = RwSignal::new(false);
    let grading = RwSignal::new(None::<Assignment>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let tutor_id = tutor_id.get_value();
        spawn_local(async move {
            match api.assignments_for_tutor(&tutor_id).await {
                Ok(list) => set_assignments.set(Some(list)),
                Err(e) => toasts.failed("Loading assignments", &e),
            }
        });
    });

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.users_by_role(Role::Student).await {
                Ok(list) => set_students.set(list),
                Err(e) => toasts.failed("Loading students", &e),
            }
        });
    });

    let names = Memo::new(move |_| students.with(|s| names_by_id(s)));

    let visible = move || {
        let list = assignments.get()?;
        let (filter, q) = (status.get(), query.get());
        Some(names.with(|names| {
            list.into_iter()
                .filter(|a| filter.matches(a, today))
                .map(|a| {
                    let student = name_or_id(names, &a.student_id);
                    (a, student)
                })
                .filter(|(a, student)| matches_query(&q, &[&a.title, &a.subject, student]))
                .collect::<Vec<_>>()
        }))
    };

    view! {
        <section class="page assignments-page">
            <div class="page-toolbar">
                <FilterTabs options=AssignmentFilter::ALL.to_vec() label=AssignmentFilter::label selected=status />
                <SearchBar value=query placeholder="Search by title, subject or student" />
                <button type="button" class="btn btn-primary" on:click=move |_| creating.set(true)>
                    "+ New assignment"
                </button>
            </div>
            {move || match visible() {
                None => view! { <Loading /> }.into_any(),
                Some(rows) if rows.is_empty() => view! { <EmptyState message="No assignments here" icon="📝" /> }.into_any(),
                Some(rows) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Assignment"</th>
                                <th>"Student"</th>
                                <th>"Subject"</th>
                                <th>"Due"</th>
                                <th>"Status"</th>
                                <th>"Score"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|(a, student)| {
                                    let overdue = a.is_overdue(today);
                                    let status_label = if overdue { "Overdue" } else { a.status.label() };
                                    let score = a.score.map(|s| format!("{} / {}", s, a.max_score)).unwrap_or_else(|| "—".into());
                                    let can_grade = a.status == AssignmentStatus::Submitted;
                                    let target = a.clone();
                                    view! {
                                        <tr class:overdue=overdue>
                                            <td>{a.title.clone()}</td>
                                            <td>{student}</td>
                                            <td>{a.subject.clone()}</td>
                                            <td>{format::date(a.due_on)}</td>
                                            <td><StatusBadge label=status_label tone=assignment_tone(a.status, overdue) /></td>
                                            <td>{score}</td>
                                            <td>
                                                <Show when=move || can_grade>
                                                    <button
                                                        type="button"
                                                        class="btn btn-primary btn-small"
                                                        on:click={
                                                            let target = target.clone();
                                                            move |_| grading.set(Some(target.clone()))
                                                        }
                                                    >
                                                        "Grade"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
            <Show when=move || creating.get()>
                <CreateDialog
                    tutor_id=tutor_id.get_value()
                    students=students
                    on_close=move |_| creating.set(false)
                />
            </Show>
            {move || grading.get().map(|assignment| {
                let student = names.with(|names| name_or_id(names, &assignment.student_id));
                view! { <GradeDialog assignment=assignment student=student on_close=move |_| grading.set(None) /> }
            })}
        </section>
    }
}

#[component]
fn CreateDialog(
    tutor_id: String,
    students: ReadSignal<Vec<UserAccount>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let tutor_id = StoredValue::new(tutor_id);

    let (classes, set_classes) = signal(Vec::<ClassSession>::new());
    let class_id = RwSignal::new(String::new());
    let student_id = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_on = RwSignal::new(String::new());
    let max_score = RwSignal::new("100".to_string());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let api = ctx.api();
        let tutor_id = tutor_id.get_value();
        spawn_local(async move {
            match api.classes_for_tutor(&tutor_id).await {
                Ok(list) => set_classes.set(list),
                Err(e) => toasts.failed("Loading classes", &e),
            }
        });
    });

    // Picking a class fills in its subject and narrows the student list
    let selected_class = Memo::new(move |_| {
        let id = class_id.get();
        classes.with(|list| list.iter().find(|c| c.id == id).cloned())
    });
    Effect::new(move |_| {
        if let Some(class) = selected_class.get() {
            subject.set(class.subject.clone());
            if !class.has_student(&student_id.get_untracked()) {
                student_id.set(String::new());
            }
        }
    });
    let eligible = move || {
        let class = selected_class.get();
        students.with(|list| {
            list.iter()
                .filter(|s| s.is_active())
                .filter(|s| class.as_ref().map_or(true, |c| c.has_student(&s.id)))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (student_value, subject_value, title_value, due_value, max_value) =
            (student_id.get(), subject.get(), title.get(), due_on.get(), max_score.get());
        let submitted = submit_if_valid(
            &[
                ("Student", &student_value),
                ("Subject", &subject_value),
                ("Title", &title_value),
                ("Due date", &due_value),
                ("Max score", &max_value),
            ],
            || {
                let class_value = class_id.get();
                let new_assignment = NewAssignment {
                    class_id: (!class_value.is_empty()).then_some(class_value),
                    subject: subject_value.clone(),
                    title: title_value.clone(),
                    description: description.get(),
                    student_id: student_value.clone(),
                    tutor_id: tutor_id.get_value(),
                    due_on: Some(parse_date("Due date", &due_value)?),
                    max_score: parse_score("Max score", &max_value, 1000)?,
                };
                set_saving.set(true);
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.create_assignment(&new_assignment).await;
                    set_saving.set(false);
                    match result {
                        Ok(assignment) => {
                            info!(assignment = %assignment.id, "assignment set");
                            toasts.success(format!("Set \"{}\"", assignment.title));
                            on_close.run(());
                            ctx.reload();
                        }
                        Err(e) => toasts.failed("Creating assignment", &e),
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
        <Modal title="New assignment" on_close=on_close>
            <form class="form" on:submit=save>
                <label class="field">
                    <span>"Class (optional)"</span>
                    <select prop:value=move || class_id.get() on:change=move |ev| class_id.set(event_target_value(&ev))>
                        <option value="">"No class"</option>
                        <For each=move || classes.get() key=|c| c.id.clone() let:class>
                            <option value=class.id.clone()>{class.title.clone()}</option>
                        </For>
                    </select>
                </label>
                <label class="field">
                    <span>"Student"</span>
                    <select prop:value=move || student_id.get() on:change=move |ev| student_id.set(event_target_value(&ev))>
                        <option value="">"Choose a student"</option>
                        <For each=eligible key=|s| s.id.clone() let:student>
                            <option value=student.id.clone()>{student.name.clone()}</option>
                        </For>
                    </select>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Subject"</span>
                        <input type="text" prop:value=move || subject.get() on:input=move |ev| subject.set(event_target_value(&ev)) />
                    </label>
                    <label class="field">
                        <span>"Due"</span>
                        <input type="date" prop:value=move || due_on.get() on:input=move |ev| due_on.set(event_target_value(&ev)) />
                    </label>
                    <label class="field">
                        <span>"Max score"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || max_score.get()
                            on:input=move |ev| max_score.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="field">
                    <span>"Title"</span>
                    <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Instructions (Markdown)"</span>
                    <textarea
                        rows="5"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Set assignment" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn GradeDialog(assignment: Assignment, student: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let score = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (id, max) = (StoredValue::new(assignment.id.clone()), assignment.max_score);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = score.get();
        let submitted = submit_if_valid(&[("Score", &value)], || {
            let points = parse_score("Score", &value, max)?;
            set_saving.set(true);
            let api = ctx.api();
            let id = id.get_value();
            spawn_local(async move {
                let result = api.grade_assignment(&id, points).await;
                set_saving.set(false);
                match result {
                    Ok(graded) => {
                        info!(assignment = %graded.id, score = points, "assignment graded");
                        toasts.success(format!("Graded \"{}\"", graded.title));
                        on_close.run(());
                        ctx.reload();
                    }
                    Err(e) => toasts.failed("Grading", &e),
                }
            });
            Ok(())
        });
        if let Err(e) = submitted {
            toasts.error(e.to_string());
        }
    };

    view! {
        <Modal title=format!("Grade: {}", assignment.title) on_close=on_close>
            <form class="form" on:submit=save>
                <p class="muted">{format!("{} · {} · due {}", student, assignment.subject, format::date(assignment.due_on))}</p>
                <label class="field">
                    <span>{format!("Score (out of {})", max)}</span>
                    <input
                        type="number"
                        min="0"
                        max=max.to_string()
                        prop:value=move || score.get()
                        on:input=move |ev| score.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save grade" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_submitted_fixture_work_is_gradeable() {
        let gradeable: Vec<_> = fixtures::assignments()
            .into_iter()
            .filter(|a| a.status == AssignmentStatus::Submitted)
            .collect();
        assert!(!gradeable.is_empty());
        let names: HashMap<_, _> = names_by_id(&fixtures::users());
        for a in gradeable {
            assert_ne!(name_or_id(&names, &a.student_id), a.student_id);
        }
    }
}
