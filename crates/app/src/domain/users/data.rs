//! User Data

use crate::domain::users::records::{DeliveryAddress, Role, UserUuid};

/// Sign-up payload.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub delivery_address: DeliveryAddress,
    pub phone_number: String,
}

impl NewUser {
    pub(crate) fn has_missing_fields(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.username,
            &self.email,
            &self.password,
            &self.phone_number,
            &self.delivery_address.street_address,
            &self.delivery_address.city,
            &self.delivery_address.state,
            &self.delivery_address.postal_code,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish_non_exhaustive()
    }
}

/// Row inserted for a new account.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecord {
    pub uuid: UserUuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub delivery_address: DeliveryAddress,
    pub phone_number: String,
}

/// Admin decision on a pending account deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionDecision {
    Approve,
    Reject,
}
