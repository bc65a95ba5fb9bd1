//! Dashboard Aggregates
//!
//! Summaries each portal's landing page shows. Computed from the same
//! repositories the list endpoints read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::billing::outstanding_cents;
use super::grades::overall_average;
use super::MockBackend;
use crate::domain::*;
use crate::repository::Repository;

/// How many upcoming classes the dashboards list
const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub users_by_role: Vec<(Role, usize)>,
    pub active_users: usize,
    pub suspended_users: usize,
    pub scheduled_classes: usize,
    pub collected_cents: u64,
    pub outstanding_cents: u64,
    pub overdue_invoices: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorOverview {
    pub upcoming_classes: Vec<ClassSession>,
    pub students: usize,
    /// Submitted assignments waiting for a grade
    pub to_grade: usize,
    pub pending_bookings: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentOverview {
    pub upcoming_classes: Vec<ClassSession>,
    pub pending_assignments: usize,
    pub overdue_assignments: usize,
    pub next_due: Option<Assignment>,
    pub average_percentage: Option<f64>,
}

/// Parent dashboard stats for the active child
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildOverview {
    pub child_id: String,
    pub upcoming_classes: usize,
    pub next_class: Option<ClassSession>,
    pub pending_assignments: usize,
    pub overdue_assignments: usize,
    pub average_percentage: Option<f64>,
    pub unpaid_cents: u64,
}

/// Counts behind the navigation badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub unread_messages: usize,
    pub unread_notifications: usize,
    /// Pending work for students, work to grade for tutors
    pub open_assignments: usize,
    pub unpaid_invoices: usize,
}

fn upcoming(mut classes: Vec<ClassSession>, today: NaiveDate) -> Vec<ClassSession> {
    classes.retain(|c| c.is_upcoming(today));
    classes.sort_by_key(|c| c.starts_at);
    classes.truncate(UPCOMING_LIMIT);
    classes
}

impl MockBackend {
    pub async fn admin_overview(&self) -> DomainResult<AdminOverview> {
        self.report_delay().await;
        let today = self.today();
        let stores = self.stores();
        let users = stores.users.list().await?;
        let classes = stores.classes.list().await?;
        let invoices = stores.invoices.list().await?;

        let users_by_role = Role::ALL
            .iter()
            .map(|role| (*role, users.iter().filter(|u| u.role == *role).count()))
            .collect();
        let active_users = users.iter().filter(|u| u.is_active()).count();

        Ok(AdminOverview {
            users_by_role,
            active_users,
            suspended_users: users.len() - active_users,
            scheduled_classes: classes.iter().filter(|c| c.status == ClassStatus::Scheduled).count(),
            collected_cents: invoices.iter().filter(|i| i.is_paid()).map(|i| i.amount_cents).sum(),
            outstanding_cents: outstanding_cents(&invoices),
            overdue_invoices: invoices.iter().filter(|i| i.is_overdue(today)).count(),
        })
    }

    pub async fn tutor_overview(&self, tutor_id: &str) -> DomainResult<TutorOverview> {
        self.report_delay().await;
        let stores = self.stores();
        let classes = stores.classes.list_where(&|c: &ClassSession| c.tutor_id == tutor_id).await?;
        let to_grade = stores
            .assignments
            .list_where(&|a: &Assignment| a.tutor_id == tutor_id && a.status == AssignmentStatus::Submitted)
            .await?
            .len();
        let pending_bookings = stores
            .bookings
            .list_where(&|b: &Booking| b.tutor_id == tutor_id && b.status == BookingStatus::Requested)
            .await?
            .len();

        let mut students: Vec<&str> = classes
            .iter()
            .flat_map(|c| c.student_ids.iter().map(String::as_str))
            .collect();
        students.sort_unstable();
        students.dedup();
        let student_count = students.len();

        Ok(TutorOverview {
            upcoming_classes: upcoming(classes, self.today()),
            students: student_count,
            to_grade,
            pending_bookings,
        })
    }

    pub async fn student_overview(&self, student_id: &str) -> DomainResult<StudentOverview> {
        self.report_delay().await;
        let today = self.today();
        let stores = self.stores();
        let classes = stores.classes.list_where(&|c: &ClassSession| c.has_student(student_id)).await?;
        let mut pending = stores
            .assignments
            .list_where(&|a: &Assignment| a.student_id == student_id && a.status == AssignmentStatus::Pending)
            .await?;
        pending.sort_by_key(|a| a.due_on);
        let grades = stores.grades.list_where(&|g: &Grade| g.student_id == student_id).await?;

        Ok(StudentOverview {
            upcoming_classes: upcoming(classes, today),
            pending_assignments: pending.len(),
            overdue_assignments: pending.iter().filter(|a| a.is_overdue(today)).count(),
            next_due: pending.iter().find(|a| a.due_on >= today).cloned(),
            average_percentage: overall_average(&grades),
        })
    }

    pub async fn child_overview(&self, child_id: &str) -> DomainResult<ChildOverview> {
        let student = self.student_overview(child_id).await?;
        let invoices = self
            .stores()
            .invoices
            .list_where(&|i: &Invoice| i.child_id == child_id)
            .await?;

        Ok(ChildOverview {
            child_id: child_id.to_string(),
            upcoming_classes: student.upcoming_classes.len(),
            next_class: student.upcoming_classes.first().cloned(),
            pending_assignments: student.pending_assignments,
            overdue_assignments: student.overdue_assignments,
            average_percentage: student.average_percentage,
            unpaid_cents: outstanding_cents(&invoices),
        })
    }

    /// Badge counts for the signed-in user's navigation
    pub async fn activity_counts(&self, user_id: &str, role: Role) -> DomainResult<ActivityCounts> {
        self.read_delay().await;
        let stores = self.stores();
        let unread_messages = stores
            .messages
            .list_where(&|m: &Message| m.to_id == user_id && !m.read)
            .await?
            .len();
        let unread_notifications = stores
            .notifications
            .list_where(&|n: &Notification| n.user_id == user_id && !n.read)
            .await?
            .len();
        let open_assignments = match role {
            Role::Student => stores
                .assignments
                .list_where(&|a: &Assignment| a.student_id == user_id && a.status == AssignmentStatus::Pending)
                .await?
                .len(),
            Role::Tutor => stores
                .assignments
                .list_where(&|a: &Assignment| a.tutor_id == user_id && a.status == AssignmentStatus::Submitted)
                .await?
                .len(),
            Role::Admin | Role::Parent => 0,
        };
        let unpaid_invoices = match role {
            Role::Parent => stores
                .invoices
                .list_where(&|i: &Invoice| i.parent_id == user_id && !i.is_paid())
                .await?
                .len(),
            Role::Admin => stores.invoices.list_where(&|i: &Invoice| !i.is_paid()).await?.len(),
            Role::Tutor | Role::Student => 0,
        };

        Ok(ActivityCounts {
            unread_messages,
            unread_notifications,
            open_assignments,
            unpaid_invoices,
        })
    }
}
