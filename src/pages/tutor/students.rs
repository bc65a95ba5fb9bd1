//! My Students
//!
//! Students enrolled in any of this tutor's classes, and the booking
//! requests waiting for an answer.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::pages::{name_or_id, names_by_id};
use crate::components::{booking_tone, EmptyState, Loading, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::models::{Booking, BookingStatus, ClassSession, Role, Session, UserAccount};
use crate::toast::use_toasts;

/// A student and the titles of the classes they share with the tutor
#[derive(Debug, Clone, PartialEq)]
struct Enrolment {
    student: UserAccount,
    classes: Vec<String>,
}

/// Group the roster of every class by student, ordered by name
fn enrolments(classes: &[ClassSession], students: &[UserAccount]) -> Vec<Enrolment> {
    let mut by_student: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for class in classes {
        for id in &class.student_ids {
            by_student.entry(id.as_str()).or_default().push(class.title.clone());
        }
    }
    let mut list: Vec<Enrolment> = students
        .iter()
        .filter_map(|s| {
            by_student.get(s.id.as_str()).map(|classes| Enrolment {
                student: s.clone(),
                classes: classes.clone(),
            })
        })
        .collect();
    list.sort_by(|a, b| a.student.name.cmp(&b.student.name));
    list
}

#[component]
pub fn TutorStudents(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let tutor_id = StoredValue::new(session.user_id);

    let (roster, set_roster) = signal::<Option<Vec<Enrolment>>>(None);
    let (bookings, set_bookings) = signal::<Option<Vec<Booking>>>(None);
    let (students, set_students) = signal(Vec::<UserAccount>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let tutor_id = tutor_id.get_value();
        spawn_local(async move {
            let loaded = async {
                let classes = api.classes_for_tutor(&tutor_id).await?;
                let people = api.users_by_role(Role::Student).await?;
                let requests = api.bookings_for_tutor(&tutor_id).await?;
                Ok::<_, crate::models::DomainError>((classes, people, requests))
            }
            .await;
            match loaded {
                Ok((classes, people, requests)) => {
                    set_roster.set(Some(enrolments(&classes, &people)));
                    set_bookings.set(Some(requests));
                    set_students.set(people);
                }
                Err(e) => toasts.failed("Loading students", &e),
            }
        });
    });

    let respond = move |id: String, accept: bool| {
        let api = ctx.api();
        spawn_local(async move {
            match api.respond_to_booking(&id, accept).await {
                Ok(booking) => {
                    info!(booking = %booking.id, accepted = accept, "booking answered");
                    toasts.success(format!("Booking {}", booking.status.label().to_lowercase()));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Answering booking", &e),
            }
        });
    };

    view! {
        <section class="page students-page">
            <div class="card">
                <h2>"Booking requests"</h2>
                {move || match bookings.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(list) if list.is_empty() => view! { <EmptyState message="No booking requests" icon="📨" /> }.into_any(),
                    Some(list) => {
                        let names = students.with(|s| names_by_id(s));
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Student"</th>
                                        <th>"Subject"</th>
                                        <th>"When"</th>
                                        <th>"Notes"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|b| {
                                            let open = b.status == BookingStatus::Requested;
                                            let (accept_id, decline_id) = (b.id.clone(), b.id.clone());
                                            view! {
                                                <tr>
                                                    <td>{name_or_id(&names, &b.student_id)}</td>
                                                    <td>{b.subject.clone()}</td>
                                                    <td>{format!("{} at {}", format::date(b.date), b.slot)}</td>
                                                    <td class="muted">{b.notes.clone()}</td>
                                                    <td><StatusBadge label=b.status.label() tone=booking_tone(b.status) /></td>
                                                    <td class="row-actions">
                                                        <Show when=move || open>
                                                            <button
                                                                type="button"
                                                                class="btn btn-primary btn-small"
                                                                on:click={
                                                                    let id = accept_id.clone();
                                                                    move |_| respond(id.clone(), true)
                                                                }
                                                            >
                                                                "Accept"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="btn btn-ghost btn-small"
                                                                on:click={
                                                                    let id = decline_id.clone();
                                                                    move |_| respond(id.clone(), false)
                                                                }
                                                            >
                                                                "Decline"
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
                        .into_any()
                    }
                }}
            </div>

            <div class="card">
                <h2>"Students"</h2>
                {move || match roster.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(list) if list.is_empty() => view! { <EmptyState message="No students yet" icon="🎓" /> }.into_any(),
                    Some(list) => view! {
                        <ul class="roster">
                            {list
                                .into_iter()
                                .map(|e| view! {
                                    <li class:muted=!e.student.is_active()>
                                        <img class="avatar avatar-small" src=e.student.avatar.clone() alt="" />
                                        <div>
                                            <strong>{e.student.name.clone()}</strong>
                                            <span class="muted">{format!(" · {}", e.student.email)}</span>
                                            <p class="muted">{e.classes.join(", ")}</p>
                                        </div>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_enrolments_group_classes_per_student() {
        let classes: Vec<_> = fixtures::classes().into_iter().filter(|c| c.tutor_id == "tutor-1").collect();
        let list = enrolments(&classes, &fixtures::users());
        let names: Vec<_> = list.iter().map(|e| e.student.name.as_str()).collect();
        assert_eq!(names, vec!["Emma Walker", "Leo Walker", "Noah Patel"]);
        let noah = &list[2];
        assert_eq!(noah.classes, vec!["Algebra Foundations".to_string()]);
    }

    #[test]
    fn test_enrolments_skip_unknown_accounts() {
        assert!(enrolments(&fixtures::classes(), &[]).is_empty());
    }
}
