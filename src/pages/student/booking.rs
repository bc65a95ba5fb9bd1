//! Book a Session
//!
//! Request a one-to-one slot with a tutor and track earlier requests.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{booking_tone, EmptyState, Loading, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::forms::{parse_date, submit_if_valid};
use crate::models::{Booking, NewBooking, Role, Session, UserAccount, BOOKING_SLOTS};
use crate::toast::use_toasts;

#[component]
pub fn StudentBooking(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let today = ctx.today();
    let student_id = StoredValue::new(session.user_id);

    let (tutors, set_tutors) = signal(Vec::<UserAccount>::new());
    let (bookings, set_bookings) = signal::<Option<Vec<Booking>>>(None);

    let tutor_id = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let slot = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.users_by_role(Role::Tutor).await {
                Ok(list) => set_tutors.set(list.into_iter().filter(UserAccount::is_active).collect()),
                Err(e) => toasts.failed("Loading tutors", &e),
            }
        });
    });

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let student_id = student_id.get_value();
        spawn_local(async move {
            match api.bookings_for_student(&student_id).await {
                Ok(list) => set_bookings.set(Some(list)),
                Err(e) => toasts.failed("Loading bookings", &e),
            }
        });
    });

    let tutor_name = move |id: &str| {
        tutors.with(|list| list.iter().find(|t| t.id == id).map(|t| t.name.clone()).unwrap_or_else(|| id.to_string()))
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (tutor_value, subject_value, date_value, slot_value) = (tutor_id.get(), subject.get(), date.get(), slot.get());
        let submitted = submit_if_valid(
            &[
                ("Tutor", &tutor_value),
                ("Subject", &subject_value),
                ("Date", &date_value),
                ("Time", &slot_value),
            ],
            || {
                let request = NewBooking {
                    student_id: student_id.get_value(),
                    tutor_id: tutor_value.clone(),
                    subject: subject_value.clone(),
                    date: Some(parse_date("Date", &date_value)?),
                    slot: slot_value.clone(),
                    notes: notes.get(),
                };
                set_saving.set(true);
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.request_booking(&request).await;
                    set_saving.set(false);
                    match result {
                        Ok(booking) => {
                            info!(booking = %booking.id, tutor = %booking.tutor_id, "session requested");
                            toasts.success(format!("Requested {} on {}", booking.slot, format::date(booking.date)));
                            subject.set(String::new());
                            slot.set(String::new());
                            notes.set(String::new());
                            ctx.reload();
                        }
                        Err(e) => toasts.failed("Booking", &e),
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
        <section class="page booking-page">
            <div class="card">
                <h2>"Request a session"</h2>
                <form class="form" on:submit=save>
                    <div class="field-row">
                        <label class="field">
                            <span>"Tutor"</span>
                            <select prop:value=move || tutor_id.get() on:change=move |ev| tutor_id.set(event_target_value(&ev))>
                                <option value="">"Choose a tutor"</option>
                                <For each=move || tutors.get() key=|t| t.id.clone() let:tutor>
                                    <option value=tutor.id.clone()>{tutor.name.clone()}</option>
                                </For>
                            </select>
                        </label>
                        <label class="field">
                            <span>"Subject"</span>
                            <input
                                type="text"
                                placeholder="e.g. Maths"
                                prop:value=move || subject.get()
                                on:input=move |ev| subject.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="field-row">
                        <label class="field">
                            <span>"Date"</span>
                            <input
                                type="date"
                                min=today.format("%Y-%m-%d").to_string()
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Time"</span>
                            <select prop:value=move || slot.get() on:change=move |ev| slot.set(event_target_value(&ev))>
                                <option value="">"Choose a time"</option>
                                {BOOKING_SLOTS
                                    .iter()
                                    .map(|s| view! { <option value=*s>{*s}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <label class="field">
                        <span>"Notes for the tutor"</span>
                        <textarea
                            rows="3"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Sending..." } else { "Request session" }}
                        </button>
                    </div>
                </form>
            </div>

            <div class="card">
                <h2>"My requests"</h2>
                {move || match bookings.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(list) if list.is_empty() => view! { <EmptyState message="No sessions requested yet" icon="📨" /> }.into_any(),
                    Some(list) => view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Tutor"</th>
                                    <th>"Subject"</th>
                                    <th>"When"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|b| view! {
                                        <tr>
                                            <td>{tutor_name(&b.tutor_id)}</td>
                                            <td>{b.subject.clone()}</td>
                                            <td>{format!("{} at {}", format::date(b.date), b.slot)}</td>
                                            <td><StatusBadge label=b.status.label() tone=booking_tone(b.status) /></td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
