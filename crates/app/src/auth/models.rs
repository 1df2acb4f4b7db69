//! Auth data models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{auth::SessionTokenVersion, domain::users::records::UserUuid};

/// Authenticated caller attached to every protected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user: UserUuid,
    pub is_admin: bool,
}

impl Identity {
    #[must_use]
    pub const fn user(user: UserUuid) -> Self {
        Self {
            user,
            is_admin: false,
        }
    }

    #[must_use]
    pub const fn admin(user: UserUuid) -> Self {
        Self {
            user,
            is_admin: true,
        }
    }

    /// Whether the caller owns `owner`'s resources or is an admin.
    #[must_use]
    pub fn can_access(self, owner: UserUuid) -> bool {
        self.is_admin || self.user == owner
    }
}

/// Session token data used during bearer authentication.
#[derive(Debug, Clone)]
pub struct ActiveSessionToken {
    pub uuid: Uuid,

    /// User that owns this session.
    pub user_uuid: UserUuid,

    /// Token format/hash version.
    pub version: SessionTokenVersion,

    /// SHA-256 verifier for the token secret material.
    pub token_hash: String,

    pub expires_at: Timestamp,
}

/// Session token metadata persisted in storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTokenMetadata {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: SessionTokenVersion,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New session token persistence payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSessionToken {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: SessionTokenVersion,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// Session token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSessionToken {
    pub token: String,
    pub metadata: SessionTokenMetadata,
}
