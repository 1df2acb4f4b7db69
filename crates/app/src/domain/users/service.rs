//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::{Identity, hash_password},
    domain::users::{
        data::{DeletionDecision, NewUser, NewUserRecord},
        errors::UsersServiceError,
        records::{Role, UserRecord, UserUuid},
        repository::UsersRepository,
    },
};

#[derive(Clone)]
pub struct UsersManager {
    repository: Arc<dyn UsersRepository>,
}

impl UsersManager {
    #[must_use]
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

fn require_admin(identity: Identity) -> Result<(), UsersServiceError> {
    if identity.is_admin {
        Ok(())
    } else {
        Err(UsersServiceError::Forbidden)
    }
}

#[async_trait]
impl UsersService for UsersManager {
    async fn sign_up(&self, user: NewUser, role: Role) -> Result<UserRecord, UsersServiceError> {
        if user.has_missing_fields() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        if self
            .repository
            .find_by_username_or_email(&user.username, &user.email)
            .await?
            .is_some()
        {
            return Err(UsersServiceError::AlreadyExists);
        }

        let password_hash = hash_password(&user.password)?;

        let created = self
            .repository
            .create_user(&NewUserRecord {
                uuid: UserUuid::new(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                username: user.username.clone(),
                email: user.email.clone(),
                password_hash,
                role,
                delivery_address: user.delivery_address.clone(),
                phone_number: user.phone_number.clone(),
            })
            .await?;

        info!(user_uuid = %created.uuid, role = %created.role, "registered user");

        Ok(created)
    }

    async fn my_profile(&self, identity: Identity) -> Result<UserRecord, UsersServiceError> {
        Ok(self.repository.get_user(identity.user).await?)
    }

    async fn list_users(&self, identity: Identity) -> Result<Vec<UserRecord>, UsersServiceError> {
        require_admin(identity)?;

        Ok(self.repository.list_users().await?)
    }

    async fn update_role(
        &self,
        identity: Identity,
        user: UserUuid,
        role: Role,
    ) -> Result<UserRecord, UsersServiceError> {
        require_admin(identity)?;

        Ok(self.repository.update_role(user, role).await?)
    }

    async fn delete_user(&self, identity: Identity, user: UserUuid) -> Result<(), UsersServiceError> {
        if !identity.can_access(user) {
            return Err(UsersServiceError::Forbidden);
        }

        let deleted = self
            .repository
            .delete_user(user)
            .await
            .map_err(UsersServiceError::from_delete)?;

        if deleted == 0 {
            return Err(UsersServiceError::NotFound);
        }

        info!(user_uuid = %user, "deleted user");

        Ok(())
    }

    async fn request_deletion(&self, identity: Identity) -> Result<UserRecord, UsersServiceError> {
        let user = self.repository.get_user(identity.user).await?;

        if user.deletion_requested {
            return Err(UsersServiceError::AlreadyRequested);
        }

        Ok(self
            .repository
            .set_deletion_requested(identity.user, true)
            .await?)
    }

    async fn deletion_requests(
        &self,
        identity: Identity,
    ) -> Result<Vec<UserRecord>, UsersServiceError> {
        require_admin(identity)?;

        Ok(self.repository.list_deletion_requests().await?)
    }

    async fn resolve_deletion_request(
        &self,
        identity: Identity,
        user: UserUuid,
        decision: DeletionDecision,
    ) -> Result<(), UsersServiceError> {
        require_admin(identity)?;

        let record = self.repository.get_user(user).await?;

        if !record.deletion_requested {
            return Err(UsersServiceError::NoDeletionRequest);
        }

        match decision {
            DeletionDecision::Approve => {
                self.repository
                    .delete_user(user)
                    .await
                    .map_err(UsersServiceError::from_delete)?;
            }
            DeletionDecision::Reject => {
                self.repository.set_deletion_requested(user, false).await?;
            }
        }

        info!(user_uuid = %user, ?decision, "resolved deletion request");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers a new account with the given role.
    async fn sign_up(&self, user: NewUser, role: Role) -> Result<UserRecord, UsersServiceError>;

    /// Profile of the authenticated user.
    async fn my_profile(&self, identity: Identity) -> Result<UserRecord, UsersServiceError>;

    /// All users, admin only.
    async fn list_users(&self, identity: Identity) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Change a user's role, admin only.
    async fn update_role(
        &self,
        identity: Identity,
        user: UserUuid,
        role: Role,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Delete an account. Users may delete themselves; admins may delete anyone.
    async fn delete_user(&self, identity: Identity, user: UserUuid) -> Result<(), UsersServiceError>;

    /// Flag the authenticated user's account for deletion.
    async fn request_deletion(&self, identity: Identity) -> Result<UserRecord, UsersServiceError>;

    /// Users with a pending deletion request, admin only.
    async fn deletion_requests(
        &self,
        identity: Identity,
    ) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Approve (delete) or reject (clear) a pending deletion request, admin only.
    async fn resolve_deletion_request(
        &self,
        identity: Identity,
        user: UserUuid,
        decision: DeletionDecision,
    ) -> Result<(), UsersServiceError>;
}
