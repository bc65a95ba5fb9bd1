//! Tutor Portal

mod dashboard;
mod classes;
mod class_detail;
mod assignments;
mod students;

pub use assignments::TutorAssignments;
pub use class_detail::TutorClassDetail;
pub use classes::TutorClasses;
pub use dashboard::TutorDashboard;
pub use students::TutorStudents;
