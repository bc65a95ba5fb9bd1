use leptos::prelude::*;

use super::{use_child_data, ChildData, NoChildren};
use crate::components::{FilterTabs, Loading};
use crate::context::use_app;
use crate::filter::AssignmentFilter;
use crate::pages::tables::AssignmentTable;

#[component]
pub fn ParentAssignments() -> impl IntoView {
    let today = use_app().today();
    let status = RwSignal::new(AssignmentFilter::All);
    let ChildData { child_id, data } =
        use_child_data("Loading assignments", |api, id| async move { api.assignments_for_child(&id).await });

    view! {
        <section class="page assignments-page">
            <div class="page-toolbar">
                <FilterTabs options=AssignmentFilter::ALL.to_vec() label=AssignmentFilter::label selected=status />
            </div>
            {move || {
                let filter = status.get();
                match (child_id.get(), data.get()) {
                    (None, _) => view! { <NoChildren /> }.into_any(),
                    (_, None) => view! { <Loading /> }.into_any(),
                    (Some(_), Some(list)) => {
                        let list: Vec<_> = list.into_iter().filter(|a| filter.matches(a, today)).collect();
                        view! { <AssignmentTable assignments=list today=today /> }.into_any()
                    }
                }
            }}
        </section>
    }
}
