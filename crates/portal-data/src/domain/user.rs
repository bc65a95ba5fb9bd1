//! User Accounts and Roles

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

/// The four portals a signed-in user can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Tutor,
    Student,
    Parent,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Tutor, Role::Student, Role::Parent];

    /// URL segment and serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Tutor => "tutor",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Tutor => "Tutor",
            Role::Student => "Student",
            Role::Parent => "Parent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "tutor" => Some(Role::Tutor),
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Suspended => "Suspended",
        }
    }
}

/// A portal account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Avatar image URL
    pub avatar: String,
    #[serde(default)]
    pub status: AccountStatus,
    pub joined_on: NaiveDate,
}

impl_entity!(UserAccount, "user");

impl UserAccount {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

/// Fields an admin fills in when creating an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

/// List filter for the admin users page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub query: String,
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &UserAccount) -> bool {
        let query = self.query.trim().to_lowercase();
        let query_ok = query.is_empty()
            || user.name.to_lowercase().contains(&query)
            || user.email.to_lowercase().contains(&query);
        let role_ok = self.role.map_or(true, |r| r == user.role);
        let status_ok = self.status.map_or(true, |s| s == user.status);
        query_ok && role_ok && status_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_segment() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse(" Tutor "), Some(Role::Tutor));
        assert_eq!(Role::parse("teacher"), None);
    }

    #[test]
    fn test_user_filter() {
        let user = UserAccount {
            id: "u1".into(),
            name: "Maya Chen".into(),
            email: "maya@brightpath.test".into(),
            role: Role::Tutor,
            avatar: String::new(),
            status: AccountStatus::Active,
            joined_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let mut filter = UserFilter { query: "MAYA".into(), ..Default::default() };
        assert!(filter.matches(&user));
        filter.role = Some(Role::Student);
        assert!(!filter.matches(&user));
        filter.role = None;
        filter.status = Some(AccountStatus::Suspended);
        assert!(!filter.matches(&user));
    }
}
