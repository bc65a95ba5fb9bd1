//! Parent Context
//!
//! The children a parent can see and which one is active. Every parent page
//! scopes its queries to the active child.

use serde::{Deserialize, Serialize};

use crate::models::Child;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentContext {
    children: Vec<Child>,
    active_child_id: Option<String>,
}

impl ParentContext {
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Replace the list. The selection survives if that child is still
    /// listed, otherwise the first child becomes active.
    pub fn set_children(&mut self, children: Vec<Child>) {
        let keep = self
            .active_child_id
            .as_ref()
            .filter(|id| children.iter().any(|c| &c.id == *id))
            .cloned();
        self.active_child_id = keep.or_else(|| children.first().map(|c| c.id.clone()));
        self.children = children;
    }

    /// Make `id` active. Unknown ids are ignored and return false.
    pub fn select(&mut self, id: &str) -> bool {
        if self.children.iter().any(|c| c.id == id) {
            self.active_child_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<&Child> {
        let id = self.active_child_id.as_deref()?;
        self.children.iter().find(|c| c.id == id)
    }

    pub fn active_id(&self) -> Option<String> {
        self.active_child_id.clone()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    fn children_of(parent_id: &str) -> Vec<Child> {
        fixtures::children().into_iter().filter(|c| c.parent_id == parent_id).collect()
    }

    #[test]
    fn test_first_child_selected_by_default() {
        let mut ctx = ParentContext::default();
        assert!(ctx.active().is_none());
        ctx.set_children(children_of("parent-1"));
        assert_eq!(ctx.active_id().as_deref(), Some("child-1"));
    }

    #[test]
    fn test_selection_survives_reload_when_present() {
        let mut ctx = ParentContext::default();
        ctx.set_children(children_of("parent-1"));
        assert!(ctx.select("child-2"));
        ctx.set_children(children_of("parent-1"));
        assert_eq!(ctx.active_id().as_deref(), Some("child-2"));
    }

    #[test]
    fn test_selection_falls_back_when_child_disappears() {
        let mut ctx = ParentContext::default();
        ctx.set_children(children_of("parent-1"));
        ctx.select("child-2");
        ctx.set_children(children_of("parent-2"));
        assert_eq!(ctx.active_id().as_deref(), Some("child-3"));

        ctx.set_children(Vec::new());
        assert!(ctx.active().is_none());
    }

    #[test]
    fn test_select_rejects_unknown_ids() {
        let mut ctx = ParentContext::default();
        ctx.set_children(children_of("parent-1"));
        assert!(!ctx.select("child-3"));
        assert_eq!(ctx.active().map(|c| c.id.as_str()), Some("child-1"));
    }
}
