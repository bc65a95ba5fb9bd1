//! Class Scheduling

use tracing::info;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

fn by_start(mut classes: Vec<ClassSession>) -> Vec<ClassSession> {
    classes.sort_by_key(|c| c.starts_at);
    classes
}

impl MockBackend {
    pub async fn list_classes(&self) -> DomainResult<Vec<ClassSession>> {
        self.read_delay().await;
        Ok(by_start(self.stores().classes.list().await?))
    }

    pub async fn classes_for_tutor(&self, tutor_id: &str) -> DomainResult<Vec<ClassSession>> {
        self.read_delay().await;
        let classes = self.stores().classes.list_where(&|c: &ClassSession| c.tutor_id == tutor_id).await?;
        Ok(by_start(classes))
    }

    pub async fn classes_for_student(&self, student_id: &str) -> DomainResult<Vec<ClassSession>> {
        self.read_delay().await;
        let classes = self.stores().classes.list_where(&|c: &ClassSession| c.has_student(student_id)).await?;
        Ok(by_start(classes))
    }

    pub async fn classes_for_child(&self, child_id: &str) -> DomainResult<Vec<ClassSession>> {
        self.classes_for_student(child_id).await
    }

    pub async fn class_by_id(&self, id: &str) -> DomainResult<ClassSession> {
        self.read_delay().await;
        self.stores()
            .classes
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Class", id))
    }

    pub async fn schedule_class(&self, new_class: &NewClassSession) -> DomainResult<ClassSession> {
        self.write_delay().await;
        require_fields(&[
            ("Title", &new_class.title),
            ("Subject", &new_class.subject),
            ("Tutor", &new_class.tutor_id),
        ])?;
        let starts_at = new_class
            .starts_at
            .ok_or_else(|| DomainError::InvalidInput("Start time required".to_string()))?;
        if new_class.duration_minutes == 0 {
            return Err(DomainError::InvalidInput("Duration must be positive".to_string()));
        }
        let tutor = self.require_user(&new_class.tutor_id).await?;
        if tutor.role != Role::Tutor {
            return Err(DomainError::InvalidInput(format!("{} is not a tutor", tutor.name)));
        }

        let class = ClassSession {
            id: String::new(),
            title: new_class.title.trim().to_string(),
            subject: new_class.subject.trim().to_string(),
            tutor_id: tutor.id,
            tutor_name: tutor.name,
            student_ids: new_class.student_ids.clone(),
            starts_at,
            duration_minutes: new_class.duration_minutes,
            location: new_class.location.trim().to_string(),
            status: ClassStatus::Scheduled,
        };
        let created = self.stores().classes.create(&class).await?;
        info!(class_id = %created.id, "class scheduled");
        Ok(created)
    }

    pub async fn cancel_class(&self, id: &str) -> DomainResult<ClassSession> {
        self.transition_class(id, ClassStatus::Cancelled).await
    }

    pub async fn complete_class(&self, id: &str) -> DomainResult<ClassSession> {
        self.transition_class(id, ClassStatus::Completed).await
    }

    /// Only scheduled classes can be completed or cancelled
    async fn transition_class(&self, id: &str, to: ClassStatus) -> DomainResult<ClassSession> {
        self.write_delay().await;
        self.stores().classes.modify(id, |class| {
            if class.status != ClassStatus::Scheduled {
                return Err(DomainError::Conflict(format!(
                    "class is already {}",
                    class.status.label().to_lowercase()
                )));
            }
            class.status = to;
            Ok(())
        })
    }
}
