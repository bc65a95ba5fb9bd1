//! Student Portal

mod dashboard;
mod classes;
mod assignments;
mod grades;
mod booking;

pub use assignments::{StudentAssignmentDetail, StudentAssignments};
pub use booking::StudentBooking;
pub use classes::StudentClasses;
pub use dashboard::StudentDashboard;
pub use grades::StudentGrades;
