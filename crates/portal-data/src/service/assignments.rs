//! Assignments: creation, submission and grading

use tracing::info;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

fn by_due_date(mut assignments: Vec<Assignment>) -> Vec<Assignment> {
    assignments.sort_by(|a, b| a.due_on.cmp(&b.due_on).then_with(|| a.id.cmp(&b.id)));
    assignments
}

impl MockBackend {
    pub async fn assignments_for_student(&self, student_id: &str) -> DomainResult<Vec<Assignment>> {
        self.read_delay().await;
        let list = self
            .stores()
            .assignments
            .list_where(&|a: &Assignment| a.student_id == student_id)
            .await?;
        Ok(by_due_date(list))
    }

    pub async fn assignments_for_child(&self, child_id: &str) -> DomainResult<Vec<Assignment>> {
        self.assignments_for_student(child_id).await
    }

    pub async fn assignments_for_tutor(&self, tutor_id: &str) -> DomainResult<Vec<Assignment>> {
        self.read_delay().await;
        let list = self
            .stores()
            .assignments
            .list_where(&|a: &Assignment| a.tutor_id == tutor_id)
            .await?;
        Ok(by_due_date(list))
    }

    pub async fn assignment_by_id(&self, id: &str) -> DomainResult<Assignment> {
        self.read_delay().await;
        self.stores()
            .assignments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Assignment", id))
    }

    pub async fn create_assignment(&self, new_assignment: &NewAssignment) -> DomainResult<Assignment> {
        self.write_delay().await;
        require_fields(&[
            ("Title", &new_assignment.title),
            ("Subject", &new_assignment.subject),
            ("Student", &new_assignment.student_id),
        ])?;
        let due_on = new_assignment
            .due_on
            .ok_or_else(|| DomainError::InvalidInput("Due date required".to_string()))?;
        if new_assignment.max_score == 0 {
            return Err(DomainError::InvalidInput("Maximum score must be positive".to_string()));
        }
        let student = self.require_user(&new_assignment.student_id).await?;
        if student.role != Role::Student {
            return Err(DomainError::InvalidInput(format!("{} is not a student", student.name)));
        }

        let assignment = Assignment {
            id: String::new(),
            class_id: new_assignment.class_id.clone().filter(|c| !c.is_empty()),
            subject: new_assignment.subject.trim().to_string(),
            title: new_assignment.title.trim().to_string(),
            description: new_assignment.description.trim().to_string(),
            student_id: student.id.clone(),
            tutor_id: new_assignment.tutor_id.clone(),
            due_on,
            status: AssignmentStatus::Pending,
            score: None,
            max_score: new_assignment.max_score,
        };
        let created = self.stores().assignments.create(&assignment).await?;
        self.notify(
            &student.id,
            NotificationKind::Reminder,
            "New assignment",
            &format!("{} is due {}.", created.title, created.due_on.format("%B %-d")),
        )
        .await?;
        info!(assignment_id = %created.id, student_id = %student.id, "assignment created");
        Ok(created)
    }

    /// Students may only submit their own pending work
    pub async fn submit_assignment(&self, id: &str, student_id: &str) -> DomainResult<Assignment> {
        self.write_delay().await;
        let submitted = self.stores().assignments.modify(id, |a| {
            if a.student_id != student_id {
                return Err(DomainError::Unauthorized("this assignment belongs to another student".to_string()));
            }
            if a.status != AssignmentStatus::Pending {
                return Err(DomainError::Conflict(format!("assignment is already {}", a.status.label().to_lowercase())));
            }
            a.status = AssignmentStatus::Submitted;
            Ok(())
        })?;
        info!(assignment_id = %id, "assignment submitted");
        Ok(submitted)
    }

    /// Grade a submitted assignment and record the result in the gradebook
    pub async fn grade_assignment(&self, id: &str, score: u32) -> DomainResult<Assignment> {
        self.write_delay().await;
        let graded = self.stores().assignments.modify(id, |a| {
            if a.status != AssignmentStatus::Submitted {
                return Err(DomainError::Conflict("only submitted work can be graded".to_string()));
            }
            if score > a.max_score {
                return Err(DomainError::InvalidInput(format!("score cannot exceed {}", a.max_score)));
            }
            a.status = AssignmentStatus::Graded;
            a.score = Some(score);
            Ok(())
        })?;

        let grade = Grade {
            id: String::new(),
            student_id: graded.student_id.clone(),
            subject: graded.subject.clone(),
            assessment: graded.title.clone(),
            score,
            max_score: graded.max_score,
            recorded_on: self.today(),
        };
        self.stores().grades.create(&grade).await?;
        self.notify(
            &graded.student_id,
            NotificationKind::Info,
            "Assignment graded",
            &format!("You scored {}/{} on {}.", score, graded.max_score, graded.title),
        )
        .await?;
        info!(assignment_id = %id, score, "assignment graded");
        Ok(graded)
    }
}
