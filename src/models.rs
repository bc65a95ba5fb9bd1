//! Frontend Models
//!
//! Records come straight from `portal-data`; this module adds the
//! signed-in session the UI keeps for the lifetime of the tab.

use serde::{Deserialize, Serialize};

pub use portal_data::{
    format_cents, letter_for, outstanding_cents, AccountStatus, ActivityCounts, AdminOverview, Assignment,
    AssignmentStatus, Booking, BookingStatus, Child, ChildOverview, ClassSession, ClassStatus, DomainError, Grade,
    Invoice, InvoiceStatus, Message, MockBackend, NewAssignment, NewBooking, NewClassSession, NewGrade, NewInvoice, NewMessage,
    NewUser, Notification, NotificationKind, Resource, ResourceKind, Role, StudentOverview, SubjectAverage,
    TutorOverview, UserAccount, UserFilter, BOOKING_SLOTS,
};

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl Session {
    pub fn from_account(account: &UserAccount) -> Self {
        Self {
            user_id: account.id.clone(),
            role: account.role,
            name: account.name.clone(),
            email: account.email.clone(),
            avatar: account.avatar.clone(),
        }
    }

    /// Landing route of this user's portal, e.g. "/tutor"
    pub fn portal_root(&self) -> String {
        portal_root(self.role)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Up to two initials for the avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub fn portal_root(role: Role) -> String {
    format!("/{}", role.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str, role: Role) -> Session {
        Session {
            user_id: "u1".to_string(),
            role,
            name: name.to_string(),
            email: "u1@brightpath.test".to_string(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_portal_root_per_role() {
        assert_eq!(session("A", Role::Admin).portal_root(), "/admin");
        assert_eq!(session("A", Role::Parent).portal_root(), "/parent");
    }

    #[test]
    fn test_initials_and_first_name() {
        let s = session("olivia grace walker", Role::Parent);
        assert_eq!(s.initials(), "OG");
        assert_eq!(s.first_name(), "olivia");
        assert_eq!(session("Cher", Role::Tutor).initials(), "C");
    }

    #[test]
    fn test_from_account_copies_identity() {
        let account = portal_data::fixtures::users()
            .into_iter()
            .find(|u| u.id == "tutor-1")
            .expect("fixture tutor");
        let s = Session::from_account(&account);
        assert_eq!(s.user_id, "tutor-1");
        assert_eq!(s.role, Role::Tutor);
        assert_eq!(s.portal_root(), "/tutor");
    }
}
