use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Loading;
use crate::context::use_app;
use crate::models::{Grade, Session};
use crate::pages::tables::GradeSummary;
use crate::toast::use_toasts;

#[component]
pub fn StudentGrades(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let student_id = session.user_id;
    let (grades, set_grades) = signal::<Option<Vec<Grade>>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let student_id = student_id.clone();
        spawn_local(async move {
            match api.grades_for_student(&student_id).await {
                Ok(list) => set_grades.set(Some(list)),
                Err(e) => toasts.failed("Loading grades", &e),
            }
        });
    });

    view! {
        <section class="page grades-page">
            {move || match grades.get() {
                None => view! { <Loading /> }.into_any(),
                Some(list) => view! { <GradeSummary grades=list /> }.into_any(),
            }}
        </section>
    }
}
