//! Pages
//!
//! One component per screen. `render_route` maps a resolved route onto its
//! page and wraps signed-in pages in the portal shell.

mod sign_in;
mod not_found;
mod profile;
mod messages;
mod notifications;
mod resources;
mod tables;
mod admin;
mod tutor;
mod student;
mod parent;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::{Loading, Shell};
use crate::models::{Session, UserAccount};
use crate::router::{Page, RouteMatch};

pub use not_found::NotFound;
pub use sign_in::SignIn;

pub fn render_route(found: RouteMatch, session: Option<Session>) -> AnyView {
    let Some(session) = session else {
        return match found.page() {
            Page::SignIn => view! { <SignIn /> }.into_any(),
            _ => view! { <Loading /> }.into_any(),
        };
    };
    let page = found.page();
    let id = found.param("id").unwrap_or_default().to_string();
    let shell_session = session.clone();
    view! { <Shell session=shell_session>{page_view(page, id, session)}</Shell> }.into_any()
}

pub fn render_not_found(session: Option<Session>) -> AnyView {
    match session {
        Some(session) => {
            let home = session.portal_root();
            view! { <Shell session=session><NotFound home=home /></Shell> }.into_any()
        }
        None => view! { <NotFound home=crate::router::SIGN_IN.to_string() /> }.into_any(),
    }
}

fn page_view(page: Page, id: String, session: Session) -> AnyView {
    match page {
        // Signed-in users are redirected away before this renders
        Page::SignIn => view! { <Loading /> }.into_any(),
        Page::Profile => view! { <profile::Profile session=session /> }.into_any(),
        Page::Messages => view! { <messages::Messages session=session /> }.into_any(),
        Page::Notifications => view! { <notifications::Notifications session=session /> }.into_any(),

        Page::AdminDashboard => view! { <admin::AdminDashboard /> }.into_any(),
        Page::AdminUsers => view! { <admin::AdminUsers session=session /> }.into_any(),
        Page::AdminClasses => view! { <admin::AdminClasses /> }.into_any(),
        Page::AdminBilling => view! { <admin::AdminBilling /> }.into_any(),

        Page::TutorDashboard => view! { <tutor::TutorDashboard session=session /> }.into_any(),
        Page::TutorClasses => view! { <tutor::TutorClasses session=session /> }.into_any(),
        Page::TutorClassDetail => view! { <tutor::TutorClassDetail session=session class_id=id /> }.into_any(),
        Page::TutorAssignments => view! { <tutor::TutorAssignments session=session /> }.into_any(),
        Page::TutorStudents => view! { <tutor::TutorStudents session=session /> }.into_any(),

        Page::StudentDashboard => view! { <student::StudentDashboard session=session /> }.into_any(),
        Page::StudentClasses => view! { <student::StudentClasses session=session /> }.into_any(),
        Page::StudentAssignments => view! { <student::StudentAssignments session=session /> }.into_any(),
        Page::StudentAssignmentDetail => {
            view! { <student::StudentAssignmentDetail session=session assignment_id=id /> }.into_any()
        }
        Page::StudentGrades => view! { <student::StudentGrades session=session /> }.into_any(),
        Page::StudentResources => view! { <resources::Resources /> }.into_any(),
        Page::StudentBooking => view! { <student::StudentBooking session=session /> }.into_any(),

        Page::ParentDashboard => view! { <parent::ParentDashboard /> }.into_any(),
        Page::ParentClasses => view! { <parent::ParentClasses /> }.into_any(),
        Page::ParentGrades => view! { <parent::ParentGrades /> }.into_any(),
        Page::ParentAssignments => view! { <parent::ParentAssignments /> }.into_any(),
        Page::ParentResources => view! { <parent::ParentResources /> }.into_any(),
        Page::ParentBilling => view! { <parent::ParentBilling session=session /> }.into_any(),
    }
}

/// Display names keyed by account id
fn names_by_id(users: &[UserAccount]) -> HashMap<String, String> {
    users.iter().map(|u| (u.id.clone(), u.name.clone())).collect()
}

/// Name for `id`, falling back to the raw id for unknown accounts
fn name_or_id(names: &HashMap<String, String>, id: &str) -> String {
    names.get(id).cloned().unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_name_lookup_falls_back_to_id() {
        let users = fixtures::users();
        let names = names_by_id(&users);
        let first = &users[0];
        assert_eq!(name_or_id(&names, &first.id), first.name);
        assert_eq!(name_or_id(&names, "user-missing"), "user-missing");
    }
}
