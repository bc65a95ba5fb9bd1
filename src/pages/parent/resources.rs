use leptos::prelude::*;

use super::{use_child_data, ChildData, NoChildren};
use crate::pages::resources::{subjects_of, ResourceLibrary};

/// Library narrowed to the active child's grade
#[component]
pub fn ParentResources() -> impl IntoView {
    let ChildData { child_id, data } =
        use_child_data("Loading resources", |api, id| async move { api.resources_for_child(&id).await });

    let subject = RwSignal::new(String::new());
    let subjects = Signal::derive(move || data.with(|d| d.as_deref().map(subjects_of).unwrap_or_default()));

    // A subject picked for one child may have nothing for the next
    Effect::new(move |_| {
        let _ = child_id.get();
        subject.set(String::new());
    });

    view! {
        <Show when=move || child_id.with(Option::is_some) fallback=|| view! { <NoChildren /> }>
            <ResourceLibrary resources=data subjects=subjects subject=subject />
        </Show>
    }
}
