//! Class Sessions

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl ClassStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClassStatus::Scheduled => "Scheduled",
            ClassStatus::Completed => "Completed",
            ClassStatus::Cancelled => "Cancelled",
        }
    }
}

/// A scheduled lesson taught by one tutor to one or more students
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub tutor_id: String,
    pub tutor_name: String,
    pub student_ids: Vec<String>,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: u32,
    /// Room name or meeting link
    pub location: String,
    #[serde(default)]
    pub status: ClassStatus,
}

impl_entity!(ClassSession, "class");

impl ClassSession {
    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.student_ids.iter().any(|s| s == student_id)
    }

    /// Scheduled and starting on or after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == ClassStatus::Scheduled && self.starts_at.date() >= today
    }
}

/// Fields a tutor or admin fills in to schedule a class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClassSession {
    pub title: String,
    pub subject: String,
    pub tutor_id: String,
    pub student_ids: Vec<String>,
    pub starts_at: Option<NaiveDateTime>,
    pub duration_minutes: u32,
    pub location: String,
}
