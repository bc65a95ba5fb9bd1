//! Favorite Resources
//!
//! Resource ids starred in the current tab.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Resource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    /// Flip the star on `id`, returning whether it is now a favorite
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Keep only starred resources, preserving order
    pub fn filter(&self, resources: &[Resource]) -> Vec<Resource> {
        resources.iter().filter(|r| self.contains(&r.id)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_data::fixtures;

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut favorites = Favorites::default();
        favorites.toggle("resource-1");
        let before = favorites.clone();

        assert!(favorites.toggle("resource-2"));
        assert!(!favorites.toggle("resource-2"));
        assert_eq!(favorites, before);

        assert!(!favorites.toggle("resource-1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_filter_keeps_order_and_only_favorites() {
        let resources = fixtures::resources();
        let mut favorites = Favorites::default();
        favorites.toggle(&resources[2].id);
        favorites.toggle(&resources[0].id);

        let ids: Vec<String> = favorites.filter(&resources).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![resources[0].id.clone(), resources[2].id.clone()]);
        assert_eq!(favorites.len(), 2);
    }
}
