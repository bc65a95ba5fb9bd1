//! Class Scheduling
//!
//! All classes across tutors, with a dialog to schedule new ones.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{Loading, Modal, SearchBar};
use crate::context::use_app;
use crate::filter::matches_query;
use crate::forms::{parse_date_time, submit_if_valid};
use crate::models::{ClassSession, NewClassSession, Role, UserAccount};
use crate::pages::tables::{ClassAction, ClassTable};
use crate::toast::use_toasts;

/// Offered lengths in the schedule dialog, in minutes
const DURATIONS: [u32; 4] = [30, 45, 60, 90];

#[component]
pub fn AdminClasses() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let (classes, set_classes) = signal::<Option<Vec<ClassSession>>>(None);
    let query = RwSignal::new(String::new());
    let show_dialog = RwSignal::new(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_classes().await {
                Ok(list) => set_classes.set(Some(list)),
                Err(e) => toasts.failed("Loading classes", &e),
            }
        });
    });

    let on_action = Callback::new(move |(id, action): (String, ClassAction)| {
        let api = ctx.api();
        spawn_local(async move {
            let result = match action {
                ClassAction::Complete => api.complete_class(&id).await,
                ClassAction::Cancel => api.cancel_class(&id).await,
            };
            match result {
                Ok(class) => {
                    info!(class = %class.id, status = class.status.label(), "class updated");
                    toasts.success(format!("{} marked {}", class.title, class.status.label().to_lowercase()));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Updating class", &e),
            }
        });
    });

    let visible = move || {
        let list = classes.get()?;
        let q = query.get();
        Some(
            list.into_iter()
                .filter(|c| matches_query(&q, &[&c.title, &c.subject, &c.tutor_name, &c.location]))
                .collect::<Vec<_>>(),
        )
    };

    view! {
        <section class="page classes-page">
            <div class="page-toolbar">
                <SearchBar value=query placeholder="Search classes, subjects or tutors" />
                <button type="button" class="btn btn-primary" on:click=move |_| show_dialog.set(true)>
                    "+ Schedule class"
                </button>
            </div>
            {move || match visible() {
                None => view! { <Loading /> }.into_any(),
                Some(list) => view! { <ClassTable classes=list on_action=on_action /> }.into_any(),
            }}
            <Show when=move || show_dialog.get()>
                <ScheduleDialog on_close=move |_| show_dialog.set(false) />
            </Show>
        </section>
    }
}

#[component]
fn ScheduleDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let (tutors, set_tutors) = signal(Vec::<UserAccount>::new());
    let (students, set_students) = signal(Vec::<UserAccount>::new());

    let title = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let tutor_id = RwSignal::new(String::new());
    let student_ids = RwSignal::new(BTreeSet::<String>::new());
    let starts_at = RwSignal::new(String::new());
    let duration = RwSignal::new(60u32);
    let location = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let (tutor_list, student_list) = (api.users_by_role(Role::Tutor).await, api.users_by_role(Role::Student).await);
            match (tutor_list, student_list) {
                (Ok(t), Ok(s)) => {
                    set_tutors.set(t.into_iter().filter(UserAccount::is_active).collect());
                    set_students.set(s.into_iter().filter(UserAccount::is_active).collect());
                }
                (Err(e), _) | (_, Err(e)) => toasts.failed("Loading people", &e),
            }
        });
    });

    let toggle_student = move |id: String, checked: bool| {
        student_ids.update(|ids| {
            if checked {
                ids.insert(id);
            } else {
                ids.remove(&id);
            }
        });
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (title_value, subject_value, tutor_value, starts_value) =
            (title.get(), subject.get(), tutor_id.get(), starts_at.get());
        let submitted = submit_if_valid(
            &[
                ("Title", &title_value),
                ("Subject", &subject_value),
                ("Tutor", &tutor_value),
                ("Starts", &starts_value),
            ],
            || {
                let new_class = NewClassSession {
                    title: title_value.clone(),
                    subject: subject_value.clone(),
                    tutor_id: tutor_value.clone(),
                    student_ids: student_ids.get().into_iter().collect(),
                    starts_at: Some(parse_date_time("Starts", &starts_value)?),
                    duration_minutes: duration.get(),
                    location: location.get(),
                };
                set_saving.set(true);
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.schedule_class(&new_class).await;
                    set_saving.set(false);
                    match result {
                        Ok(class) => {
                            info!(class = %class.id, tutor = %class.tutor_id, "class scheduled");
                            toasts.success(format!("Scheduled {}", class.title));
                            on_close.run(());
                            ctx.reload();
                        }
                        Err(e) => toasts.failed("Scheduling class", &e),
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
        <Modal title="Schedule class" on_close=on_close>
            <form class="form" on:submit=save>
                <label class="field">
                    <span>"Title"</span>
                    <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Subject"</span>
                    <input type="text" prop:value=move || subject.get() on:input=move |ev| subject.set(event_target_value(&ev)) />
                </label>
                <label class="field">
                    <span>"Tutor"</span>
                    <select prop:value=move || tutor_id.get() on:change=move |ev| tutor_id.set(event_target_value(&ev))>
                        <option value="">"Choose a tutor"</option>
                        <For each=move || tutors.get() key=|t| t.id.clone() let:tutor>
                            <option value=tutor.id.clone()>{tutor.name.clone()}</option>
                        </For>
                    </select>
                </label>
                <fieldset class="field">
                    <legend>"Students"</legend>
                    <div class="checkbox-list">
                        <For each=move || students.get() key=|s| s.id.clone() let:student>
                            {
                                let id = student.id.clone();
                                let checked_id = student.id.clone();
                                view! {
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || student_ids.with(|ids| ids.contains(&checked_id))
                                            on:change=move |ev| toggle_student(id.clone(), event_target_checked(&ev))
                                        />
                                        {student.name.clone()}
                                    </label>
                                }
                            }
                        </For>
                    </div>
                </fieldset>
                <div class="field-row">
                    <label class="field">
                        <span>"Starts"</span>
                        <input
                            type="datetime-local"
                            prop:value=move || starts_at.get()
                            on:input=move |ev| starts_at.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Length"</span>
                        <select
                            prop:value=move || duration.get().to_string()
                            on:change=move |ev| {
                                if let Ok(minutes) = event_target_value(&ev).parse() {
                                    duration.set(minutes);
                                }
                            }
                        >
                            {DURATIONS
                                .iter()
                                .map(|m| view! { <option value=m.to_string()>{format!("{} min", m)}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <label class="field">
                    <span>"Location"</span>
                    <input
                        type="text"
                        placeholder="Room or video link"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Scheduling..." } else { "Schedule" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
