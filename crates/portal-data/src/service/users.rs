//! Account Administration

use tracing::info;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

fn validate_new_user(new_user: &NewUser) -> DomainResult<Role> {
    require_fields(&[("Name", &new_user.name), ("Email", &new_user.email)])?;
    if !new_user.email.contains('@') {
        return Err(DomainError::InvalidInput(format!("'{}' is not an email address", new_user.email.trim())));
    }
    new_user
        .role
        .ok_or_else(|| DomainError::InvalidInput("Role required".to_string()))
}

impl MockBackend {
    pub async fn list_users(&self, filter: &UserFilter) -> DomainResult<Vec<UserAccount>> {
        self.read_delay().await;
        self.stores().users.list_where(&|u: &UserAccount| filter.matches(u)).await
    }

    pub async fn users_by_role(&self, role: Role) -> DomainResult<Vec<UserAccount>> {
        self.read_delay().await;
        self.stores().users.list_where(&|u: &UserAccount| u.role == role).await
    }

    pub async fn user_by_id(&self, id: &str) -> DomainResult<UserAccount> {
        self.read_delay().await;
        self.require_user(id).await
    }

    pub async fn create_user(&self, new_user: &NewUser) -> DomainResult<UserAccount> {
        self.write_delay().await;
        let role = validate_new_user(new_user)?;
        self.ensure_email_free(&new_user.email, None).await?;

        let name = new_user.name.trim().to_string();
        let account = UserAccount {
            id: String::new(),
            avatar: format!("https://api.dicebear.com/7.x/initials/svg?seed={}", name.replace(' ', "%20")),
            name,
            email: new_user.email.trim().to_lowercase(),
            role,
            status: AccountStatus::Active,
            joined_on: self.today(),
        };
        let created = self.stores().users.create(&account).await?;
        info!(user_id = %created.id, role = role.as_str(), "user created");
        Ok(created)
    }

    pub async fn update_user(&self, id: &str, changes: &NewUser) -> DomainResult<UserAccount> {
        self.write_delay().await;
        let role = validate_new_user(changes)?;
        self.ensure_email_free(&changes.email, Some(id)).await?;

        let mut account = self.require_user(id).await?;
        account.name = changes.name.trim().to_string();
        account.email = changes.email.trim().to_lowercase();
        account.role = role;
        self.stores().users.update(&account).await
    }

    pub async fn set_user_status(&self, id: &str, status: AccountStatus) -> DomainResult<UserAccount> {
        self.write_delay().await;
        let account = self.require_user(id).await?;
        if status == AccountStatus::Suspended && account.role == Role::Admin {
            self.ensure_other_admin(id).await?;
        }
        self.stores().users.modify(id, |u| {
            u.status = status;
            Ok(())
        })
    }

    /// Deleting the last active admin is refused
    pub async fn delete_user(&self, id: &str) -> DomainResult<()> {
        self.write_delay().await;
        let account = self.require_user(id).await?;
        if account.role == Role::Admin {
            self.ensure_other_admin(id).await?;
        }
        self.stores().users.delete(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str, except_id: Option<&str>) -> DomainResult<()> {
        let email = email.trim();
        let taken = self
            .stores()
            .users
            .list_where(&|u: &UserAccount| u.email.eq_ignore_ascii_case(email) && Some(u.id.as_str()) != except_id)
            .await?;
        if taken.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!("{} is already registered", email)))
        }
    }

    async fn ensure_other_admin(&self, id: &str) -> DomainResult<()> {
        let others = self
            .stores()
            .users
            .list_where(&|u: &UserAccount| u.role == Role::Admin && u.is_active() && u.id != id)
            .await?;
        if others.is_empty() {
            Err(DomainError::Conflict("at least one active administrator is required".to_string()))
        } else {
            Ok(())
        }
    }

    pub async fn children_for_parent(&self, parent_id: &str) -> DomainResult<Vec<Child>> {
        self.read_delay().await;
        self.stores().children.list_where(&|c: &Child| c.parent_id == parent_id).await
    }
}
