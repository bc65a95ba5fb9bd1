use leptos::prelude::*;

use super::{use_child_data, ChildData, NoChildren};
use crate::components::Loading;
use crate::pages::tables::GradeSummary;

#[component]
pub fn ParentGrades() -> impl IntoView {
    let ChildData { child_id, data } =
        use_child_data("Loading grades", |api, id| async move { api.grades_for_child(&id).await });

    view! {
        <section class="page grades-page">
            {move || match (child_id.get(), data.get()) {
                (None, _) => view! { <NoChildren /> }.into_any(),
                (_, None) => view! { <Loading /> }.into_any(),
                (Some(_), Some(list)) => view! { <GradeSummary grades=list /> }.into_any(),
            }}
        </section>
    }
}
