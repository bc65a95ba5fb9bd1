//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::favorites::Favorites;
use crate::models::{ActivityCounts, Child, Session};
use crate::parent::ParentContext;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, `None` on the sign-in screen
    pub session: Option<Session>,
    /// Children and active child (parent portal only)
    pub parent: ParentContext,
    /// Starred resources
    pub favorites: Favorites,
    /// Counts behind the sidebar badges and the bell
    pub activity: ActivityCounts,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &AppStore, session: Session) {
    *store.session().write() = Some(session);
}

/// Forget the session and everything scoped to it
pub fn store_sign_out(store: &AppStore) {
    *store.session().write() = None;
    store.parent().write().clear();
    *store.favorites().write() = Favorites::default();
    *store.activity().write() = ActivityCounts::default();
}

/// Whether `session` belongs to `user_id`
pub fn is_session_of(session: Option<&Session>, user_id: &str) -> bool {
    session.is_some_and(|s| s.user_id == user_id)
}

pub fn store_is_signed_in_as(store: &AppStore, user_id: &str) -> bool {
    store.session().with_untracked(|s| is_session_of(s.as_ref(), user_id))
}

/// Install a parent's children unless that parent has signed out since the
/// request went out; returns whether they were installed
pub fn store_set_children_for(store: &AppStore, parent_id: &str, children: Vec<Child>) -> bool {
    if !store_is_signed_in_as(store, parent_id) {
        return false;
    }
    store.parent().write().set_children(children);
    true
}

/// Returns false when `child_id` is not one of the parent's children
pub fn store_select_child(store: &AppStore, child_id: &str) -> bool {
    store.parent().write().select(child_id)
}

/// Returns whether the resource is now a favorite
pub fn store_toggle_favorite(store: &AppStore, resource_id: &str) -> bool {
    store.favorites().write().toggle(resource_id)
}

pub fn store_set_activity(store: &AppStore, counts: ActivityCounts) {
    *store.activity().write() = counts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use portal_data::fixtures;

    fn parent_session() -> Session {
        let account = fixtures::users()
            .into_iter()
            .find(|u| u.role == Role::Parent)
            .expect("fixture parent");
        Session::from_account(&account)
    }

    fn children_of(parent_id: &str) -> Vec<Child> {
        fixtures::children().into_iter().filter(|c| c.parent_id == parent_id).collect()
    }

    #[test]
    fn test_is_session_of() {
        let session = parent_session();
        assert!(is_session_of(Some(&session), &session.user_id));
        assert!(!is_session_of(Some(&session), "parent-404"));
        assert!(!is_session_of(None, &session.user_id));
    }

    #[test]
    fn test_children_are_installed_for_the_signed_in_parent() {
        let session = parent_session();
        let parent_id = session.user_id.clone();
        let store = Store::new(AppState::default());
        store_sign_in(&store, session);

        assert!(store_set_children_for(&store, &parent_id, children_of(&parent_id)));
        assert_eq!(store.parent().with_untracked(|p| p.children().len()), 2);
    }

    #[test]
    fn test_late_children_are_dropped_after_sign_out() {
        let session = parent_session();
        let parent_id = session.user_id.clone();
        let store = Store::new(AppState::default());
        store_sign_in(&store, session);
        store_sign_out(&store);

        assert!(!store_set_children_for(&store, &parent_id, children_of(&parent_id)));
        assert!(store.parent().with_untracked(|p| p.children().is_empty()));
        assert_eq!(store.parent().with_untracked(|p| p.active_id()), None);
    }
}
