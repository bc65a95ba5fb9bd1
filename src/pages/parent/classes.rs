use leptos::prelude::*;

use super::{use_child_data, ChildData, NoChildren};
use crate::components::Loading;
use crate::pages::tables::ClassTable;

#[component]
pub fn ParentClasses() -> impl IntoView {
    let ChildData { child_id, data } =
        use_child_data("Loading classes", |api, id| async move { api.classes_for_child(&id).await });

    view! {
        <section class="page classes-page">
            {move || match (child_id.get(), data.get()) {
                (None, _) => view! { <NoChildren /> }.into_any(),
                (_, None) => view! { <Loading /> }.into_any(),
                (Some(_), Some(list)) => view! { <ClassTable classes=list /> }.into_any(),
            }}
        </section>
    }
}
