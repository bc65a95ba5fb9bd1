//! Mock Backend Tests
//!
//! Run against the seeded fixtures with latency switched off.

use chrono::NaiveDate;

use super::{LatencyProfile, MockBackend};
use crate::domain::*;
use crate::latency::Latency;

fn backend() -> MockBackend {
    MockBackend::seeded().with_latency(LatencyProfile::uniform(Latency::NONE))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ========================
// Scoped list endpoints
// ========================

#[tokio::test]
async fn test_child_scoped_lists_only_return_that_child() {
    let api = backend();
    for child in ["child-1", "child-2", "child-3", "child-4"] {
        let grades = api.grades_for_child(child).await.unwrap();
        assert!(!grades.is_empty());
        assert!(grades.iter().all(|g| g.student_id == child));

        let assignments = api.assignments_for_child(child).await.unwrap();
        assert!(assignments.iter().all(|a| a.student_id == child));

        let classes = api.classes_for_child(child).await.unwrap();
        assert!(classes.iter().all(|c| c.has_student(child)));

        let invoices = api.invoices_for_child(child).await.unwrap();
        assert!(invoices.iter().all(|i| i.child_id == child));
    }
}

#[tokio::test]
async fn test_child_resources_match_the_child_grade() {
    let api = backend();
    let children = crate::fixtures::children();
    for child in &children {
        let resources = api.resources_for_child(&child.id).await.unwrap();
        assert!(!resources.is_empty(), "{} has no resources", child.id);
        assert!(resources.iter().all(|r| r.grade_level == child.grade));
    }

    // Leo is in Grade 4; the Grade 7 videos Emma sees are not his
    let leo: Vec<_> = api.resources_for_child("child-2").await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(leo, vec!["resource-2", "resource-8"]);
    assert!(api.resources_for_child("child-404").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_scoped_lists_only_return_that_user() {
    let api = backend();
    let tutor = api.classes_for_tutor("tutor-2").await.unwrap();
    assert_eq!(tutor.len(), 2);
    assert!(tutor.iter().all(|c| c.tutor_id == "tutor-2"));

    assert!(api.assignments_for_tutor("tutor-1").await.unwrap().iter().all(|a| a.tutor_id == "tutor-1"));
    assert!(api.invoices_for_parent("parent-2").await.unwrap().iter().all(|i| i.parent_id == "parent-2"));
    assert!(api.inbox("tutor-1").await.unwrap().iter().all(|m| m.to_id == "tutor-1"));
    assert!(api.sent("parent-1").await.unwrap().iter().all(|m| m.from_id == "parent-1"));
    assert!(api.notifications_for("child-1").await.unwrap().iter().all(|n| n.user_id == "child-1"));
    assert!(api.bookings_for_tutor("tutor-1").await.unwrap().iter().all(|b| b.tutor_id == "tutor-1"));

    let student_bookings = api.bookings_for_student("child-1").await.unwrap();
    assert!(!student_bookings.is_empty());
    assert!(student_bookings.iter().all(|b| b.student_id == "child-1"));

    let children = api.children_for_parent("parent-1").await.unwrap();
    let ids: Vec<_> = children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["child-1", "child-2"]);
}

#[tokio::test]
async fn test_unknown_id_yields_empty_list() {
    let api = backend();
    assert!(api.grades_for_child("child-404").await.unwrap().is_empty());
    assert!(api.children_for_parent("parent-404").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lists_are_sorted() {
    let api = backend();
    let classes = api.list_classes().await.unwrap();
    assert!(classes.windows(2).all(|w| w[0].starts_at <= w[1].starts_at));

    let grades = api.grades_for_student("child-1").await.unwrap();
    assert!(grades.windows(2).all(|w| w[0].recorded_on >= w[1].recorded_on));

    let inbox = api.inbox("tutor-1").await.unwrap();
    assert!(inbox.windows(2).all(|w| w[0].sent_at >= w[1].sent_at));
}

// ========================
// Auth & users
// ========================

#[tokio::test]
async fn test_sign_in() {
    let api = backend();
    let user = api.sign_in("  EMMA@brightpath.test ", "secret").await.unwrap();
    assert_eq!(user.id, "child-1");
    assert_eq!(user.role, Role::Student);

    assert!(matches!(api.sign_in("emma@brightpath.test", "").await, Err(DomainError::InvalidInput(_))));
    assert!(matches!(api.sign_in("nobody@brightpath.test", "x").await, Err(DomainError::Unauthorized(_))));
    assert!(matches!(api.sign_in("liam@brightpath.test", "x").await, Err(DomainError::Unauthorized(_))));
}

#[tokio::test]
async fn test_demo_accounts_cover_every_role() {
    let accounts = backend().demo_accounts().await.unwrap();
    let roles: Vec<_> = accounts.iter().map(|u| u.role).collect();
    assert_eq!(roles, Role::ALL.to_vec());
}

#[tokio::test]
async fn test_create_user_validates_and_rejects_duplicates() {
    let api = backend();
    let mut new_user = NewUser { name: "Zoe Hart".into(), email: "zoe@brightpath.test".into(), role: Some(Role::Tutor) };
    let created = api.create_user(&new_user).await.unwrap();
    assert!(created.id.starts_with("user-"));
    assert_eq!(created.joined_on, api.today());

    assert!(matches!(api.create_user(&new_user).await, Err(DomainError::Conflict(_))));

    new_user.email = "   ".into();
    let err = api.create_user(&new_user).await.unwrap_err();
    assert_eq!(err, DomainError::InvalidInput("Email required".into()));

    new_user.email = "not-an-email".into();
    assert!(matches!(api.create_user(&new_user).await, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_update_user_keeps_own_email() {
    let api = backend();
    let changes = NewUser { name: "Maya Chen-Li".into(), email: "maya@brightpath.test".into(), role: Some(Role::Tutor) };
    let updated = api.update_user("tutor-1", &changes).await.unwrap();
    assert_eq!(updated.name, "Maya Chen-Li");

    let stolen = NewUser { email: "daniel@brightpath.test".into(), ..changes };
    assert!(matches!(api.update_user("tutor-1", &stolen).await, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_last_admin_is_protected() {
    let api = backend();
    assert!(matches!(api.delete_user("admin-1").await, Err(DomainError::Conflict(_))));
    assert!(matches!(
        api.set_user_status("admin-1", AccountStatus::Suspended).await,
        Err(DomainError::Conflict(_))
    ));

    api.delete_user("tutor-3").await.unwrap();
    assert!(matches!(api.user_by_id("tutor-3").await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_list_users_filter() {
    let api = backend();
    let filter = UserFilter { role: Some(Role::Parent), ..Default::default() };
    let parents = api.list_users(&filter).await.unwrap();
    assert_eq!(parents.len(), 2);

    let filter = UserFilter { query: "walker".into(), ..Default::default() };
    assert_eq!(api.list_users(&filter).await.unwrap().len(), 3);
}

// ========================
// Classes
// ========================

#[tokio::test]
async fn test_schedule_and_cancel_class() {
    let api = backend();
    let new_class = NewClassSession {
        title: "Geometry".into(),
        subject: "Maths".into(),
        tutor_id: "tutor-1".into(),
        student_ids: vec!["child-2".into()],
        starts_at: date(2025, 3, 20).and_hms_opt(16, 0, 0),
        duration_minutes: 45,
        location: "Room 1".into(),
    };
    let class = api.schedule_class(&new_class).await.unwrap();
    assert_eq!(class.tutor_name, "Maya Chen");
    assert!(api.classes_for_child("child-2").await.unwrap().iter().any(|c| c.id == class.id));

    let cancelled = api.cancel_class(&class.id).await.unwrap();
    assert_eq!(cancelled.status, ClassStatus::Cancelled);
    assert!(matches!(api.complete_class(&class.id).await, Err(DomainError::Conflict(_))));

    let not_a_tutor = NewClassSession { tutor_id: "child-1".into(), ..new_class };
    assert!(matches!(api.schedule_class(&not_a_tutor).await, Err(DomainError::InvalidInput(_))));
}

// ========================
// Assignments & grades
// ========================

#[tokio::test]
async fn test_assignment_lifecycle_records_grade() {
    let api = backend();
    let before = api.grades_for_student("child-1").await.unwrap().len();

    let submitted = api.submit_assignment("assignment-1", "child-1").await.unwrap();
    assert_eq!(submitted.status, AssignmentStatus::Submitted);
    assert!(matches!(
        api.submit_assignment("assignment-1", "child-1").await,
        Err(DomainError::Conflict(_))
    ));

    assert!(matches!(api.grade_assignment("assignment-1", 21).await, Err(DomainError::InvalidInput(_))));
    let graded = api.grade_assignment("assignment-1", 17).await.unwrap();
    assert_eq!(graded.score, Some(17));

    let grades = api.grades_for_student("child-1").await.unwrap();
    assert_eq!(grades.len(), before + 1);
    assert!(grades.iter().any(|g| g.assessment == "Linear equations worksheet" && g.score == 17));

    let notes = api.notifications_for("child-1").await.unwrap();
    assert!(notes.iter().any(|n| n.title == "Assignment graded"));
}

#[tokio::test]
async fn test_cannot_submit_someone_elses_work() {
    let api = backend();
    assert!(matches!(
        api.submit_assignment("assignment-1", "child-2").await,
        Err(DomainError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn test_grading_pending_work_is_refused() {
    let api = backend();
    assert!(matches!(api.grade_assignment("assignment-3", 10).await, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_create_assignment_requires_fields() {
    let api = backend();
    let mut new_assignment = NewAssignment {
        subject: "Maths".into(),
        title: "".into(),
        student_id: "child-2".into(),
        tutor_id: "tutor-1".into(),
        due_on: Some(date(2025, 3, 20)),
        max_score: 10,
        ..Default::default()
    };
    assert!(matches!(api.create_assignment(&new_assignment).await, Err(DomainError::InvalidInput(_))));

    new_assignment.title = "Decimals".into();
    let created = api.create_assignment(&new_assignment).await.unwrap();
    assert_eq!(created.status, AssignmentStatus::Pending);
    assert!(api.assignments_for_child("child-2").await.unwrap().iter().any(|a| a.id == created.id));
}

#[tokio::test]
async fn test_subject_averages() {
    let api = backend();
    let averages = api.subject_averages("child-1").await.unwrap();
    let subjects: Vec<_> = averages.iter().map(|a| a.subject.as_str()).collect();
    assert_eq!(subjects, vec!["English", "Maths", "Science"]);
    let maths = &averages[1];
    assert_eq!(maths.count, 2);
    assert!((maths.average - 86.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_record_grade_rejects_out_of_range() {
    let api = backend();
    let grade = NewGrade {
        student_id: "child-2".into(),
        subject: "Maths".into(),
        assessment: "Quiz".into(),
        score: 11,
        max_score: 10,
        recorded_on: None,
    };
    assert!(matches!(api.record_grade(&grade).await, Err(DomainError::InvalidInput(_))));
}

// ========================
// Billing
// ========================

#[tokio::test]
async fn test_pay_invoice_once() {
    let api = backend();
    let paid = api.pay_invoice("invoice-1").await.unwrap();
    assert!(paid.is_paid());
    assert_eq!(paid.paid_on, Some(api.today()));
    assert!(matches!(api.pay_invoice("invoice-1").await, Err(DomainError::Conflict(_))));
    assert!(matches!(api.pay_invoice("invoice-404").await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_invoice_checks_family() {
    let api = backend();
    let mut new_invoice = NewInvoice {
        parent_id: "parent-1".into(),
        child_id: "child-3".into(),
        description: "April tuition".into(),
        amount_cents: 24000,
        due_on: Some(date(2025, 4, 15)),
    };
    assert!(matches!(api.create_invoice(&new_invoice).await, Err(DomainError::InvalidInput(_))));

    new_invoice.child_id = "child-1".into();
    let created = api.create_invoice(&new_invoice).await.unwrap();
    assert_eq!(created.issued_on, api.today());
    assert!(api.invoices_for_parent("parent-1").await.unwrap().iter().any(|i| i.id == created.id));
}

// ========================
// Messages & notifications
// ========================

#[tokio::test]
async fn test_send_and_read_message() {
    let api = backend();
    let before = api.unread_message_count("tutor-2").await.unwrap();
    let sent = api
        .send_message(&NewMessage {
            from_id: "parent-1".into(),
            to_id: "tutor-2".into(),
            subject: "Science help".into(),
            body: "Could Emma get extra practice?".into(),
        })
        .await
        .unwrap();
    assert_eq!(sent.from_name, "Olivia Walker");
    assert_eq!(api.unread_message_count("tutor-2").await.unwrap(), before + 1);

    api.mark_message_read(&sent.id).await.unwrap();
    assert_eq!(api.unread_message_count("tutor-2").await.unwrap(), before);
}

#[tokio::test]
async fn test_send_message_requires_body() {
    let api = backend();
    let err = api
        .send_message(&NewMessage {
            from_id: "parent-1".into(),
            to_id: "tutor-2".into(),
            subject: "Hello".into(),
            body: " ".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::InvalidInput("Message required".into()));
}

#[tokio::test]
async fn test_mark_all_notifications_read() {
    let api = backend();
    assert_eq!(api.unread_notification_count("child-1").await.unwrap(), 2);
    assert_eq!(api.mark_all_notifications_read("child-1").await.unwrap(), 2);
    assert_eq!(api.unread_notification_count("child-1").await.unwrap(), 0);
    assert_eq!(api.unread_notification_count("parent-1").await.unwrap(), 1);
}

// ========================
// Resources & bookings
// ========================

#[tokio::test]
async fn test_resources_by_subject() {
    let api = backend();
    let science = api.list_resources(Some("science")).await.unwrap();
    assert_eq!(science.len(), 3);
    assert!(science.iter().all(|r| r.subject == "Science"));
    assert_eq!(api.list_resources(Some("  ")).await.unwrap().len(), 8);
    assert_eq!(api.resource_subjects().await.unwrap(), vec!["English", "Maths", "Science"]);
}

#[tokio::test]
async fn test_booking_rules() {
    let api = backend();
    let mut request = NewBooking {
        student_id: "child-2".into(),
        tutor_id: "tutor-1".into(),
        subject: "Maths".into(),
        date: Some(date(2025, 3, 19)),
        slot: "17:00".into(),
        notes: String::new(),
    };
    // booking-2 already holds this slot
    assert!(matches!(api.request_booking(&request).await, Err(DomainError::Conflict(_))));

    request.date = Some(date(2025, 3, 1));
    assert!(matches!(api.request_booking(&request).await, Err(DomainError::InvalidInput(_))));

    request.date = Some(date(2025, 3, 19));
    request.slot = "12:34".into();
    assert!(matches!(api.request_booking(&request).await, Err(DomainError::InvalidInput(_))));

    request.slot = "10:30".into();
    let booking = api.request_booking(&request).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Requested);

    let confirmed = api.respond_to_booking(&booking.id, true).await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(matches!(api.respond_to_booking(&booking.id, false).await, Err(DomainError::Conflict(_))));
}

// ========================
// Dashboards
// ========================

#[tokio::test]
async fn test_admin_overview() {
    let overview = backend().admin_overview().await.unwrap();
    assert_eq!(overview.suspended_users, 1);
    assert_eq!(overview.scheduled_classes, 4);
    assert_eq!(overview.collected_cents, 24000 + 18000 + 18000);
    assert_eq!(overview.outstanding_cents, 24000 + 18000 + 24000);
    assert_eq!(overview.overdue_invoices, 1);
}

#[tokio::test]
async fn test_child_overview_is_scoped() {
    let api = backend();
    let emma = api.child_overview("child-1").await.unwrap();
    assert_eq!(emma.child_id, "child-1");
    assert_eq!(emma.pending_assignments, 2);
    assert_eq!(emma.overdue_assignments, 1);
    assert_eq!(emma.unpaid_cents, 24000);
    assert_eq!(emma.next_class.map(|c| c.id), Some("class-1".to_string()));

    let leo = api.child_overview("child-2").await.unwrap();
    assert_eq!(leo.unpaid_cents, 18000);
}

#[tokio::test]
async fn test_tutor_overview() {
    let overview = backend().tutor_overview("tutor-1").await.unwrap();
    assert_eq!(overview.students, 3);
    assert_eq!(overview.to_grade, 1);
    assert_eq!(overview.upcoming_classes.len(), 2);
}

#[tokio::test]
async fn test_activity_counts_by_role() {
    let api = backend();
    let student = api.activity_counts("child-1", Role::Student).await.unwrap();
    assert_eq!(student.open_assignments, 2);
    assert_eq!(student.unread_messages, 1);
    assert_eq!(student.unpaid_invoices, 0);

    let parent = api.activity_counts("parent-1", Role::Parent).await.unwrap();
    assert_eq!(parent.unpaid_invoices, 2);
    assert_eq!(parent.open_assignments, 0);
}
