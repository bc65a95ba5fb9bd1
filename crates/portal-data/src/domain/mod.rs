//! Domain Layer
//!
//! Plain records shaped like the portal's mock fixtures.
//! No referential integrity beyond matching ids by convention.

mod entity;
mod user;
mod child;
mod class_session;
mod assignment;
mod grade;
mod invoice;
mod message;
mod resource;
mod booking;

pub use entity::{Entity, DomainError, DomainResult};
pub use user::{Role, AccountStatus, UserAccount, NewUser, UserFilter};
pub use child::Child;
pub use class_session::{ClassSession, ClassStatus, NewClassSession};
pub use assignment::{Assignment, AssignmentStatus, NewAssignment};
pub use grade::{Grade, NewGrade, SubjectAverage, letter_for, percentage};
pub use invoice::{Invoice, InvoiceStatus, NewInvoice, format_cents};
pub use message::{Message, NewMessage, Notification, NotificationKind};
pub use resource::{Resource, ResourceKind};
pub use booking::{Booking, BookingStatus, NewBooking, BOOKING_SLOTS};
