//! Resource Library
//!
//! Students browse the whole library; parents see what matches the active
//! child's grade. Both share `ResourceLibrary` for the subject filter, search
//! and the favorites-only view backed by the app store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::components::{EmptyState, Loading, MarkdownView, SearchBar};
use crate::context::use_app;
use crate::filter::matches_query;
use crate::models::Resource;
use crate::store::{store_toggle_favorite, use_app_store, AppStateStoreFields};
use crate::toast::use_toasts;

#[component]
pub fn Resources() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let (resources, set_resources) = signal::<Option<Vec<Resource>>>(None);
    let (subjects, set_subjects) = signal(Vec::<String>::new());
    let subject = RwSignal::new(String::new());

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.resource_subjects().await {
                Ok(list) => set_subjects.set(list),
                Err(e) => toasts.failed("Loading subjects", &e),
            }
        });
    });

    Effect::new(move |_| {
        let selected = subject.get();
        let api = ctx.api();
        spawn_local(async move {
            let filter = (!selected.is_empty()).then_some(selected.as_str());
            match api.list_resources(filter).await {
                Ok(list) => set_resources.set(Some(list)),
                Err(e) => toasts.failed("Loading resources", &e),
            }
        });
    });

    view! { <ResourceLibrary resources=resources subjects=subjects subject=subject /> }
}

/// Distinct subjects in `resources`, alphabetical
pub(crate) fn subjects_of(resources: &[Resource]) -> Vec<String> {
    let mut subjects: Vec<String> = resources.iter().map(|r| r.subject.clone()).collect();
    subjects.sort();
    subjects.dedup();
    subjects
}

/// Subject filter, search box, favorites toggle and the card grid
#[component]
pub(crate) fn ResourceLibrary(
    #[prop(into)] resources: Signal<Option<Vec<Resource>>>,
    #[prop(into)] subjects: Signal<Vec<String>>,
    subject: RwSignal<String>,
) -> impl IntoView {
    let store = use_app_store();
    let query = RwSignal::new(String::new());
    let favorites_only = RwSignal::new(false);

    let visible = move || {
        let list = resources.get()?;
        let list = if favorites_only.get() { store.favorites().with(|f| f.filter(&list)) } else { list };
        let (q, selected) = (query.get(), subject.get());
        Some(
            list.into_iter()
                .filter(|r| selected.is_empty() || r.subject.eq_ignore_ascii_case(&selected))
                .filter(|r| matches_query(&q, &[&r.title, &r.subject, &r.description]))
                .collect::<Vec<_>>(),
        )
    };

    let toggle = move |id: String| {
        let starred = store_toggle_favorite(&store, &id);
        debug!(resource = %id, starred, "favorite toggled");
    };

    view! {
        <section class="page resources-page">
            <div class="page-toolbar">
                <SearchBar value=query placeholder="Search resources" />
                <select prop:value=move || subject.get() on:change=move |ev| subject.set(event_target_value(&ev))>
                    <option value="">"All subjects"</option>
                    {move || subjects.get().into_iter().map(|s| view! { <option value=s.clone()>{s.clone()}</option> }).collect_view()}
                </select>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || favorites_only.get()
                        on:change=move |ev| favorites_only.set(event_target_checked(&ev))
                    />
                    "★ Favorites only"
                </label>
            </div>
            {move || match visible() {
                None => view! { <Loading /> }.into_any(),
                Some(list) if list.is_empty() => {
                    let message = if favorites_only.get() { "No favorites yet" } else { "No resources match" };
                    view! { <EmptyState message=message icon="📚" /> }.into_any()
                }
                Some(list) => view! {
                    <div class="resource-grid">
                        {list
                            .into_iter()
                            .map(|r| {
                                let id = r.id.clone();
                                let starred = Signal::derive({
                                    let id = id.clone();
                                    move || store.favorites().with(|f| f.contains(&id))
                                });
                                view! {
                                    <article class="resource-card">
                                        <header>
                                            <span class="resource-kind" title=r.kind.label()>{r.kind.icon()}</span>
                                            <h3>{r.title.clone()}</h3>
                                            <button
                                                type="button"
                                                class="favorite-btn"
                                                class:starred=move || starred.get()
                                                title="Favorite"
                                                on:click=move |_| toggle(id.clone())
                                            >
                                                {move || if starred.get() { "★" } else { "☆" }}
                                            </button>
                                        </header>
                                        <p class="muted">{format!("{} · {}", r.subject, r.grade_level)}</p>
                                        <MarkdownView text=r.description.clone() />
                                        <a class="btn btn-secondary btn-small" href=r.url.clone() target="_blank" rel="noopener noreferrer">
                                            "Open"
                                        </a>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_subjects_of_is_sorted_and_distinct() {
        assert_eq!(subjects_of(&fixtures::resources()), vec!["English", "Maths", "Science"]);
        assert!(subjects_of(&[]).is_empty());
    }
}
