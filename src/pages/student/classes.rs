use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Loading;
use crate::context::use_app;
use crate::models::{ClassSession, Session};
use crate::pages::tables::ClassTable;
use crate::toast::use_toasts;

#[component]
pub fn StudentClasses(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let student_id = session.user_id;
    let (classes, set_classes) = signal::<Option<Vec<ClassSession>>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let student_id = student_id.clone();
        spawn_local(async move {
            match api.classes_for_student(&student_id).await {
                Ok(list) => set_classes.set(Some(list)),
                Err(e) => toasts.failed("Loading classes", &e),
            }
        });
    });

    view! {
        <section class="page classes-page">
            {move || match classes.get() {
                None => view! { <Loading /> }.into_any(),
                Some(list) => view! { <ClassTable classes=list /> }.into_any(),
            }}
        </section>
    }
}
