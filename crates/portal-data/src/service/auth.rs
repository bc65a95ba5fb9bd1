//! Demo Sign-In
//!
//! There is no real authentication: any non-empty password is accepted for
//! an active account.

use tracing::{debug, info};

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

impl MockBackend {
    pub async fn sign_in(&self, email: &str, password: &str) -> DomainResult<UserAccount> {
        self.read_delay().await;
        require_fields(&[("Email", email), ("Password", password)])?;

        let email = email.trim();
        let matches = self
            .stores()
            .users
            .list_where(&|u: &UserAccount| u.email.eq_ignore_ascii_case(email))
            .await?;
        let user = matches
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Unauthorized(format!("no account for {}", email)))?;

        if !user.is_active() {
            debug!(user_id = %user.id, "sign-in refused for suspended account");
            return Err(DomainError::Unauthorized("this account is suspended".to_string()));
        }

        info!(user_id = %user.id, role = user.role.as_str(), "signed in");
        Ok(user)
    }

    /// First active account of each role, for the sign-in quick picks
    pub async fn demo_accounts(&self) -> DomainResult<Vec<UserAccount>> {
        self.read_delay().await;
        let users = self.stores().users.list().await?;
        Ok(Role::ALL
            .iter()
            .filter_map(|role| users.iter().find(|u| u.role == *role && u.is_active()).cloned())
            .collect())
    }
}
