//! Child Records
//!
//! A parent may have several children. A child's id is the id of the
//! student account it stands for, so every student-keyed record can be
//! looked up by child id.

use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    /// School year, e.g. "Grade 7"
    pub grade: String,
    pub avatar: String,
}

impl_entity!(Child, "child");
