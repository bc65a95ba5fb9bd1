//! Assignments
//!
//! Lifecycle: Pending -> Submitted (student) -> Graded (tutor).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    #[default]
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub class_id: Option<String>,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub student_id: String,
    pub tutor_id: String,
    pub due_on: NaiveDate,
    #[serde(default)]
    pub status: AssignmentStatus,
    pub score: Option<u32>,
    pub max_score: u32,
}

impl_entity!(Assignment, "assignment");

impl Assignment {
    /// Still pending after its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == AssignmentStatus::Pending && self.due_on < today
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub class_id: Option<String>,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub student_id: String,
    pub tutor_id: String,
    pub due_on: Option<NaiveDate>,
    pub max_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_work_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut assignment = Assignment {
            id: "a1".into(),
            class_id: None,
            subject: "Maths".into(),
            title: "Fractions".into(),
            description: String::new(),
            student_id: "child-1".into(),
            tutor_id: "tutor-1".into(),
            due_on: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            status: AssignmentStatus::Pending,
            score: None,
            max_score: 20,
        };
        assert!(assignment.is_overdue(today));
        assignment.status = AssignmentStatus::Submitted;
        assert!(!assignment.is_overdue(today));
    }
}
