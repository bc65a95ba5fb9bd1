//! Parent Portal
//!
//! Every page reads the active child from the store and refetches when the
//! child switcher changes it. Results for a child that is no longer selected
//! are dropped.

mod dashboard;
mod classes;
mod grades;
mod assignments;
mod billing;
mod resources;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::components::EmptyState;
use crate::context::use_app;
use crate::models::{DomainError, MockBackend};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::toast::use_toasts;

pub use assignments::ParentAssignments;
pub use billing::ParentBilling;
pub use classes::ParentClasses;
pub use dashboard::ParentDashboard;
pub use grades::ParentGrades;
pub use resources::ParentResources;

/// Data fetched for the active child
struct ChildData<T: Send + Sync + 'static> {
    child_id: Memo<Option<String>>,
    data: ReadSignal<Option<T>>,
}

/// Fetch `load` for the active child on every child change or reload
fn use_child_data<T, F, Fut>(action: &'static str, load: F) -> ChildData<T>
where
    T: Send + Sync + 'static,
    F: Fn(MockBackend, String) -> Fut + 'static,
    Fut: Future<Output = Result<T, DomainError>> + 'static,
{
    let ctx = use_app();
    let store = use_app_store();
    let toasts = use_toasts();

    let child_id = Memo::new(move |_| store.parent().with(|p| p.active_id()));
    let (data, set_data) = signal::<Option<T>>(None);

    Effect::new(move |previous: Option<Option<String>>| {
        let _ = ctx.reload_trigger.get();
        let current = child_id.get();
        // Show loading instead of the previous child's data
        if previous.as_ref() != Some(&current) {
            set_data.set(None);
        }
        if let Some(id) = current.clone() {
            let pending = load(ctx.api(), id.clone());
            spawn_local(async move {
                let result = pending.await;
                let still_active = store.parent().with_untracked(|p| p.active_id()).as_deref() == Some(id.as_str());
                if !still_active {
                    debug!(child = %id, "dropping result for previously selected child");
                    return;
                }
                match result {
                    Ok(value) => set_data.set(Some(value)),
                    Err(e) => toasts.failed(action, &e),
                }
            });
        }
        current
    });

    ChildData { child_id, data }
}

/// Name of the active child for page headings
fn active_child_name() -> Signal<String> {
    let store = use_app_store();
    Signal::derive(move || store.parent().with(|p| p.active().map(|c| c.name.clone()).unwrap_or_default()))
}

#[component]
fn NoChildren() -> impl IntoView {
    view! { <EmptyState message="No children are linked to your account yet" icon="👪" /> }
}
