//! Seed Fixtures
//!
//! Deterministic demo data. Dates are laid out around [`FIXTURE_TODAY`] so
//! the dashboards show a mix of upcoming, overdue and finished work.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::*;

/// The "current" day the fixtures were written against
pub const FIXTURE_TODAY: (i32, u32, u32) = (2025, 3, 10);

pub fn fixture_today() -> NaiveDate {
    let (y, m, d) = FIXTURE_TODAY;
    date(y, m, d)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, minute, 0).expect("fixture times are valid")
}

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/initials/svg?seed={}", seed.replace(' ', "%20"))
}

fn user(id: &str, name: &str, email: &str, role: Role, joined_on: NaiveDate) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: avatar(name),
        status: AccountStatus::Active,
        joined_on,
    }
}

pub fn users() -> Vec<UserAccount> {
    let mut suspended = user("child-5", "Liam Brooks", "liam@brightpath.test", Role::Student, date(2024, 9, 2));
    suspended.status = AccountStatus::Suspended;

    vec![
        user("admin-1", "Avery Morgan", "admin@brightpath.test", Role::Admin, date(2023, 8, 1)),
        user("tutor-1", "Maya Chen", "maya@brightpath.test", Role::Tutor, date(2023, 9, 4)),
        user("tutor-2", "Daniel Okafor", "daniel@brightpath.test", Role::Tutor, date(2023, 9, 4)),
        user("tutor-3", "Sofia Alvarez", "sofia@brightpath.test", Role::Tutor, date(2024, 1, 8)),
        user("child-1", "Emma Walker", "emma@brightpath.test", Role::Student, date(2024, 9, 2)),
        user("child-2", "Leo Walker", "leo@brightpath.test", Role::Student, date(2024, 9, 2)),
        user("child-3", "Noah Patel", "noah@brightpath.test", Role::Student, date(2024, 9, 9)),
        user("child-4", "Ava Patel", "ava@brightpath.test", Role::Student, date(2024, 9, 9)),
        suspended,
        user("parent-1", "Olivia Walker", "olivia@brightpath.test", Role::Parent, date(2024, 8, 20)),
        user("parent-2", "Raj Patel", "raj@brightpath.test", Role::Parent, date(2024, 8, 27)),
    ]
}

fn child(id: &str, parent_id: &str, name: &str, grade: &str) -> Child {
    Child {
        id: id.to_string(),
        parent_id: parent_id.to_string(),
        name: name.to_string(),
        grade: grade.to_string(),
        avatar: avatar(name),
    }
}

pub fn children() -> Vec<Child> {
    vec![
        child("child-1", "parent-1", "Emma Walker", "Grade 7"),
        child("child-2", "parent-1", "Leo Walker", "Grade 4"),
        child("child-3", "parent-2", "Noah Patel", "Grade 9"),
        child("child-4", "parent-2", "Ava Patel", "Grade 8"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn class(
    id: &str,
    title: &str,
    subject: &str,
    tutor: (&str, &str),
    students: &[&str],
    starts_at: NaiveDateTime,
    duration_minutes: u32,
    location: &str,
    status: ClassStatus,
) -> ClassSession {
    ClassSession {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        tutor_id: tutor.0.to_string(),
        tutor_name: tutor.1.to_string(),
        student_ids: students.iter().map(|s| s.to_string()).collect(),
        starts_at,
        duration_minutes,
        location: location.to_string(),
        status,
    }
}

const MAYA: (&str, &str) = ("tutor-1", "Maya Chen");
const DANIEL: (&str, &str) = ("tutor-2", "Daniel Okafor");
const SOFIA: (&str, &str) = ("tutor-3", "Sofia Alvarez");

pub fn classes() -> Vec<ClassSession> {
    use ClassStatus::*;
    vec![
        class("class-1", "Algebra Foundations", "Maths", MAYA, &["child-1", "child-3"], at(2025, 3, 11, 16, 0), 60, "Room 2A", Scheduled),
        class("class-2", "Fractions Workshop", "Maths", MAYA, &["child-2"], at(2025, 3, 12, 15, 0), 45, "Online", Scheduled),
        class("class-3", "Cells & Organisms", "Science", DANIEL, &["child-1", "child-4"], at(2025, 3, 7, 10, 0), 60, "Lab 1", Completed),
        class("class-4", "Forces and Motion", "Science", DANIEL, &["child-3"], at(2025, 3, 13, 14, 0), 60, "Lab 1", Scheduled),
        class("class-5", "Creative Writing", "English", SOFIA, &["child-1", "child-2"], at(2025, 3, 14, 17, 0), 60, "Online", Scheduled),
        class("class-6", "Reading Circle", "English", SOFIA, &["child-4"], at(2025, 3, 6, 16, 0), 45, "Library", Cancelled),
    ]
}

#[allow(clippy::too_many_arguments)]
fn assignment(
    id: &str,
    class_id: Option<&str>,
    student_id: &str,
    tutor_id: &str,
    subject: &str,
    title: &str,
    due_on: NaiveDate,
    status: AssignmentStatus,
    score: Option<u32>,
    max_score: u32,
) -> Assignment {
    Assignment {
        id: id.to_string(),
        class_id: class_id.map(str::to_string),
        subject: subject.to_string(),
        title: title.to_string(),
        description: format!("Complete **{}** and hand it in before the due date.", title),
        student_id: student_id.to_string(),
        tutor_id: tutor_id.to_string(),
        due_on,
        status,
        score,
        max_score,
    }
}

pub fn assignments() -> Vec<Assignment> {
    use AssignmentStatus::*;
    vec![
        assignment("assignment-1", Some("class-1"), "child-1", "tutor-1", "Maths", "Linear equations worksheet", date(2025, 3, 12), Pending, None, 20),
        assignment("assignment-2", Some("class-3"), "child-1", "tutor-2", "Science", "Cell diagram", date(2025, 3, 5), Graded, Some(18), 20),
        assignment("assignment-3", Some("class-5"), "child-1", "tutor-3", "English", "Short story draft", date(2025, 3, 8), Pending, None, 50),
        assignment("assignment-4", Some("class-2"), "child-2", "tutor-1", "Maths", "Fraction practice", date(2025, 3, 11), Submitted, None, 10),
        assignment("assignment-5", Some("class-5"), "child-2", "tutor-3", "English", "Book report", date(2025, 3, 17), Pending, None, 30),
        assignment("assignment-6", Some("class-1"), "child-3", "tutor-1", "Maths", "Quadratics quiz prep", date(2025, 3, 9), Graded, Some(14), 20),
        assignment("assignment-7", Some("class-4"), "child-3", "tutor-2", "Science", "Motion lab write-up", date(2025, 3, 15), Pending, None, 25),
        assignment("assignment-8", Some("class-3"), "child-4", "tutor-2", "Science", "Microscope observations", date(2025, 3, 10), Submitted, None, 20),
    ]
}

fn grade(id: &str, student_id: &str, subject: &str, assessment: &str, score: u32, max_score: u32, recorded_on: NaiveDate) -> Grade {
    Grade {
        id: id.to_string(),
        student_id: student_id.to_string(),
        subject: subject.to_string(),
        assessment: assessment.to_string(),
        score,
        max_score,
        recorded_on,
    }
}

pub fn grades() -> Vec<Grade> {
    vec![
        grade("grade-1", "child-1", "Maths", "Unit 3 test", 46, 50, date(2025, 2, 14)),
        grade("grade-2", "child-1", "Science", "Cell diagram", 18, 20, date(2025, 3, 6)),
        grade("grade-3", "child-1", "English", "Poetry analysis", 31, 40, date(2025, 2, 21)),
        grade("grade-4", "child-1", "Maths", "Quiz: ratios", 16, 20, date(2025, 3, 3)),
        grade("grade-5", "child-2", "Maths", "Times tables", 27, 30, date(2025, 2, 18)),
        grade("grade-6", "child-2", "English", "Spelling test", 17, 20, date(2025, 3, 4)),
        grade("grade-7", "child-3", "Maths", "Quadratics quiz prep", 14, 20, date(2025, 3, 9)),
        grade("grade-8", "child-3", "Science", "Energy test", 38, 50, date(2025, 2, 26)),
        grade("grade-9", "child-4", "Science", "Lab safety", 19, 20, date(2025, 2, 12)),
        grade("grade-10", "child-4", "English", "Reading log", 22, 30, date(2025, 2, 27)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    id: &str,
    parent_id: &str,
    child_id: &str,
    description: &str,
    amount_cents: u64,
    issued_on: NaiveDate,
    due_on: NaiveDate,
    paid_on: Option<NaiveDate>,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        parent_id: parent_id.to_string(),
        child_id: child_id.to_string(),
        description: description.to_string(),
        amount_cents,
        issued_on,
        due_on,
        status: if paid_on.is_some() { InvoiceStatus::Paid } else { InvoiceStatus::Unpaid },
        paid_on,
    }
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        invoice("invoice-1", "parent-1", "child-1", "March tuition – Emma", 24000, date(2025, 3, 1), date(2025, 3, 15), None),
        invoice("invoice-2", "parent-1", "child-2", "March tuition – Leo", 18000, date(2025, 3, 1), date(2025, 3, 15), None),
        invoice("invoice-3", "parent-1", "child-1", "February tuition – Emma", 24000, date(2025, 2, 1), date(2025, 2, 15), Some(date(2025, 2, 10))),
        invoice("invoice-4", "parent-1", "child-2", "February tuition – Leo", 18000, date(2025, 2, 1), date(2025, 2, 15), Some(date(2025, 2, 12))),
        invoice("invoice-5", "parent-2", "child-3", "March tuition – Noah", 24000, date(2025, 2, 20), date(2025, 3, 5), None),
        invoice("invoice-6", "parent-2", "child-4", "March tuition – Ava", 18000, date(2025, 2, 20), date(2025, 3, 5), Some(date(2025, 3, 2))),
    ]
}

fn message(id: &str, from: (&str, &str), to_id: &str, subject: &str, body: &str, sent_at: NaiveDateTime, read: bool) -> Message {
    Message {
        id: id.to_string(),
        from_id: from.0.to_string(),
        from_name: from.1.to_string(),
        to_id: to_id.to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
        sent_at,
        read,
    }
}

pub fn messages() -> Vec<Message> {
    const AVERY: (&str, &str) = ("admin-1", "Avery Morgan");
    const OLIVIA: (&str, &str) = ("parent-1", "Olivia Walker");
    const RAJ: (&str, &str) = ("parent-2", "Raj Patel");
    const EMMA: (&str, &str) = ("child-1", "Emma Walker");
    vec![
        message("message-1", MAYA, "child-1", "Worksheet hints", "Remember to **show your working** for questions 4–6.", at(2025, 3, 9, 18, 5), false),
        message("message-2", SOFIA, "parent-1", "Emma's short story", "Emma's draft is a few days late. Could she send it by *Wednesday*?", at(2025, 3, 9, 9, 30), false),
        message("message-3", OLIVIA, "tutor-1", "Leo's schedule", "Leo will be ten minutes late on Wednesday.", at(2025, 3, 8, 20, 15), true),
        message("message-4", AVERY, "tutor-1", "Term planning", "Please submit next term's class plan by **March 21**.", at(2025, 3, 7, 11, 0), false),
        message("message-5", RAJ, "admin-1", "Invoice question", "Can the March invoice for Noah be split into two payments?", at(2025, 3, 6, 14, 40), false),
        message("message-6", EMMA, "tutor-3", "Extension request", "Could I have until Wednesday for the story draft?", at(2025, 3, 8, 17, 45), true),
        message("message-7", DANIEL, "parent-2", "Great progress", "Noah did really well in the energy unit.", at(2025, 3, 5, 16, 20), true),
    ]
}

fn notification(id: &str, user_id: &str, kind: NotificationKind, title: &str, body: &str, created_at: NaiveDateTime, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        kind,
        created_at,
        read,
    }
}

pub fn notifications() -> Vec<Notification> {
    use NotificationKind::*;
    vec![
        notification("notification-1", "child-1", Reminder, "Assignment due soon", "Linear equations worksheet is due March 12.", at(2025, 3, 10, 7, 0), false),
        notification("notification-2", "child-1", Alert, "Overdue work", "Short story draft was due March 8.", at(2025, 3, 9, 7, 0), false),
        notification("notification-3", "parent-1", Alert, "Invoice due", "March tuition is due on March 15.", at(2025, 3, 8, 8, 0), false),
        notification("notification-4", "parent-1", Info, "New grade", "Emma scored 18/20 on Cell diagram.", at(2025, 3, 6, 12, 0), true),
        notification("notification-5", "tutor-1", Info, "Submission received", "Leo submitted Fraction practice.", at(2025, 3, 10, 8, 30), false),
        notification("notification-6", "tutor-2", Reminder, "Class tomorrow", "Forces and Motion starts at 14:00 on March 13.", at(2025, 3, 10, 9, 0), false),
        notification("notification-7", "admin-1", Alert, "Overdue invoice", "invoice-5 for Noah Patel is overdue.", at(2025, 3, 6, 9, 0), false),
        notification("notification-8", "parent-2", Alert, "Invoice overdue", "March tuition for Noah was due March 5.", at(2025, 3, 6, 9, 0), false),
    ]
}

fn resource(id: &str, title: &str, subject: &str, kind: ResourceKind, url: &str, description: &str, grade_level: &str) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        kind,
        url: url.to_string(),
        description: description.to_string(),
        grade_level: grade_level.to_string(),
    }
}

pub fn resources() -> Vec<Resource> {
    use ResourceKind::*;
    vec![
        resource("resource-1", "Solving linear equations", "Maths", Video, "https://learn.brightpath.test/v/linear", "A 12 minute walkthrough of *balancing* both sides.", "Grade 7"),
        resource("resource-2", "Fractions cheat sheet", "Maths", Document, "https://learn.brightpath.test/d/fractions.pdf", "Equivalent fractions, simplifying, and mixed numbers.", "Grade 4"),
        resource("resource-3", "Quadratics practice set", "Maths", Worksheet, "https://learn.brightpath.test/w/quadratics", "Twenty questions with worked answers at the end.", "Grade 9"),
        resource("resource-4", "Inside a plant cell", "Science", Video, "https://learn.brightpath.test/v/plant-cell", "Organelles and what they do.", "Grade 7"),
        resource("resource-5", "Newton's laws explained", "Science", Link, "https://learn.brightpath.test/l/newton", "Interactive simulations for each law.", "Grade 9"),
        resource("resource-6", "Microscope lab guide", "Science", Document, "https://learn.brightpath.test/d/microscope.pdf", "Step-by-step slide preparation.", "Grade 8"),
        resource("resource-7", "Story structure planner", "English", Worksheet, "https://learn.brightpath.test/w/story", "Plan *beginning*, *middle* and *end* before drafting.", "Grade 7"),
        resource("resource-8", "Reading comprehension tips", "English", Link, "https://learn.brightpath.test/l/reading", "Strategies for tricky passages.", "Grade 4"),
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "booking-1".to_string(),
            student_id: "child-1".to_string(),
            tutor_id: "tutor-2".to_string(),
            subject: "Science".to_string(),
            date: date(2025, 3, 18),
            slot: "15:30".to_string(),
            notes: "Revision before the cells test.".to_string(),
            status: BookingStatus::Requested,
        },
        Booking {
            id: "booking-2".to_string(),
            student_id: "child-3".to_string(),
            tutor_id: "tutor-1".to_string(),
            subject: "Maths".to_string(),
            date: date(2025, 3, 19),
            slot: "17:00".to_string(),
            notes: String::new(),
            status: BookingStatus::Confirmed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id.to_string()), "duplicate fixture id {}", id);
        }
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        assert_unique(users().iter().map(|u| u.id.as_str()));
        assert_unique(classes().iter().map(|c| c.id.as_str()));
        assert_unique(assignments().iter().map(|a| a.id.as_str()));
        assert_unique(grades().iter().map(|g| g.id.as_str()));
        assert_unique(invoices().iter().map(|i| i.id.as_str()));
        assert_unique(messages().iter().map(|m| m.id.as_str()));
        assert_unique(resources().iter().map(|r| r.id.as_str()));
    }

    #[test]
    fn test_children_are_student_accounts() {
        let users = users();
        for child in children() {
            let account = users.iter().find(|u| u.id == child.id).expect("child has an account");
            assert_eq!(account.role, Role::Student);
            let parent = users.iter().find(|u| u.id == child.parent_id).expect("parent exists");
            assert_eq!(parent.role, Role::Parent);
        }
    }

    #[test]
    fn test_records_serialize_as_json() {
        let json = serde_json::to_value(&assignments()[0]).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["due_on"], "2025-03-12");
    }
}
