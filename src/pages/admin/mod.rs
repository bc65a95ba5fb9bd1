//! Admin Portal

mod dashboard;
mod users;
mod classes;
mod billing;

pub use billing::AdminBilling;
pub use classes::AdminClasses;
pub use dashboard::AdminDashboard;
pub use users::AdminUsers;
