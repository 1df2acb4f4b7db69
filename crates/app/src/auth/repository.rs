//! Session token repository.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{ActiveSessionToken, NewSessionToken, SessionTokenMetadata, SessionTokenVersion},
    domain::users::records::UserUuid,
};

const CREATE_SESSION_TOKEN_SQL: &str = include_str!("sql/create_session_token.sql");
const FIND_ACTIVE_SESSION_TOKEN_SQL: &str = include_str!("sql/find_active_session_token.sql");
const TOUCH_SESSION_TOKEN_SQL: &str = include_str!("sql/touch_session_token.sql");
const REVOKE_SESSION_TOKEN_SQL: &str = include_str!("sql/revoke_session_token.sql");

#[automock]
#[async_trait]
pub trait SessionsRepository: Send + Sync {
    async fn create_session_token(
        &self,
        token: &NewSessionToken,
    ) -> Result<SessionTokenMetadata, sqlx::Error>;

    /// Unrevoked token by id and version. Expired tokens are still returned.
    async fn find_active_session_token(
        &self,
        token_uuid: Uuid,
        version: SessionTokenVersion,
    ) -> Result<Option<ActiveSessionToken>, sqlx::Error>;

    async fn touch_session_token(&self, token_uuid: Uuid) -> Result<(), sqlx::Error>;

    /// Returns `None` when the token was unknown or already revoked.
    async fn revoke_session_token(
        &self,
        token_uuid: Uuid,
    ) -> Result<Option<SessionTokenMetadata>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgSessionsRepository {
    pool: PgPool,
}

impl PgSessionsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionsRepository for PgSessionsRepository {
    async fn create_session_token(
        &self,
        token: &NewSessionToken,
    ) -> Result<SessionTokenMetadata, sqlx::Error> {
        query_as::<Postgres, SessionTokenMetadata>(CREATE_SESSION_TOKEN_SQL)
            .bind(token.uuid)
            .bind(token.user_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(SqlxTimestamp::from(token.expires_at))
            .fetch_one(&self.pool)
            .await
    }

    async fn find_active_session_token(
        &self,
        token_uuid: Uuid,
        version: SessionTokenVersion,
    ) -> Result<Option<ActiveSessionToken>, sqlx::Error> {
        query_as::<Postgres, ActiveSessionToken>(FIND_ACTIVE_SESSION_TOKEN_SQL)
            .bind(token_uuid)
            .bind(version.as_i16())
            .fetch_optional(&self.pool)
            .await
    }

    async fn touch_session_token(&self, token_uuid: Uuid) -> Result<(), sqlx::Error> {
        query(TOUCH_SESSION_TOKEN_SQL)
            .bind(token_uuid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn revoke_session_token(
        &self,
        token_uuid: Uuid,
    ) -> Result<Option<SessionTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, SessionTokenMetadata>(REVOKE_SESSION_TOKEN_SQL)
            .bind(token_uuid)
            .fetch_optional(&self.pool)
            .await
    }
}

fn try_get_version(row: &PgRow) -> sqlx::Result<SessionTokenVersion> {
    SessionTokenVersion::try_from(row.try_get::<i16, _>("version")?).map_err(|e| {
        sqlx::Error::ColumnDecode {
            index: "version".to_string(),
            source: Box::new(e),
        }
    })
}

impl<'r> FromRow<'r, PgRow> for ActiveSessionToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            version: try_get_version(row)?,
            token_hash: row.try_get("token_hash")?,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SessionTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            version: try_get_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            last_used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_used_at")?
                .map(SqlxTimestamp::to_jiff),
            revoked_at: row
                .try_get::<Option<SqlxTimestamp>, _>("revoked_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
