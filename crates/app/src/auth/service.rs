//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::{
        AuthServiceError, Identity, IssuedSessionToken, NewSessionToken, SessionTokenVersion,
        format_session_token, generate_session_token_secret, parse_session_token,
        repository::SessionsRepository, token_verifier, verify_password,
    },
    domain::users::{UsersRepository, records::UserUuid},
};

/// Default lifetime of an issued session.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(7 * 24);

#[derive(Clone)]
pub struct SessionAuthService {
    sessions: Arc<dyn SessionsRepository>,
    users: Arc<dyn UsersRepository>,
    ttl: SignedDuration,
}

impl SessionAuthService {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionsRepository>, users: Arc<dyn UsersRepository>) -> Self {
        Self {
            sessions,
            users,
            ttl: DEFAULT_SESSION_TTL,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: SignedDuration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[async_trait]
impl AuthService for SessionAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError> {
        let parsed_token =
            parse_session_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let token = self
            .sessions
            .find_active_session_token(parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if token.expires_at <= Timestamp::now() {
            return Err(AuthServiceError::Expired);
        }

        let verifier = token_verifier(
            &parsed_token.token_uuid,
            parsed_token.version,
            &token.user_uuid,
            &parsed_token.secret,
        );

        if verifier != token.token_hash {
            return Err(AuthServiceError::NotFound);
        }

        let user = match self.users.get_user(token.user_uuid).await {
            Ok(user) => user,
            Err(sqlx::Error::RowNotFound) => return Err(AuthServiceError::NotFound),
            Err(error) => return Err(error.into()),
        };

        // Auth success does not depend on this write.
        if let Err(error) = self.sessions.touch_session_token(token.uuid).await {
            warn!(token_uuid = %token.uuid, %error, "failed to touch session token");
        }

        Ok(Identity {
            user: user.uuid,
            is_admin: user.is_admin(),
        })
    }

    async fn log_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<IssuedSessionToken, AuthServiceError> {
        let credentials = self
            .users
            .find_credentials(username)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        self.issue_session(credentials.user_uuid).await
    }

    async fn issue_session(&self, user: UserUuid) -> Result<IssuedSessionToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = SessionTokenVersion::V1;
        let secret = generate_session_token_secret();
        let token = format_session_token(token_uuid, version, &secret);

        let metadata = self
            .sessions
            .create_session_token(&NewSessionToken {
                uuid: token_uuid,
                user_uuid: user,
                version,
                token_hash: token_verifier(&token_uuid, version, &user, &secret),
                expires_at: Timestamp::now() + self.ttl,
            })
            .await?;

        info!(user_uuid = %user, token_uuid = %token_uuid, "issued session");

        Ok(IssuedSessionToken { token, metadata })
    }

    async fn revoke_session(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        Ok(self
            .sessions
            .revoke_session_token(token_uuid)
            .await?
            .is_some())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token into the caller's identity.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError>;

    /// Check credentials and issue a fresh session.
    async fn log_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<IssuedSessionToken, AuthServiceError>;

    async fn issue_session(&self, user: UserUuid) -> Result<IssuedSessionToken, AuthServiceError>;

    /// Returns `true` if the session was active.
    async fn revoke_session(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError>;
}
