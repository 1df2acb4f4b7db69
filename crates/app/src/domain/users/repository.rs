//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::users::{
    data::NewUserRecord,
    records::{DeliveryAddress, Role, UserCredentials, UserRecord, UserUuid},
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const GET_USERS_SQL: &str = include_str!("sql/get_users.sql");
const FIND_USER_BY_USERNAME_OR_EMAIL_SQL: &str =
    include_str!("sql/find_user_by_username_or_email.sql");
const FIND_CREDENTIALS_SQL: &str = include_str!("sql/find_credentials.sql");
const LIST_USERS_SQL: &str = include_str!("sql/list_users.sql");
const LIST_DELETION_REQUESTS_SQL: &str = include_str!("sql/list_deletion_requests.sql");
const UPDATE_ROLE_SQL: &str = include_str!("sql/update_role.sql");
const SET_DELETION_REQUESTED_SQL: &str = include_str!("sql/set_deletion_requested.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");

/// Account persistence.
#[automock]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn create_user(&self, user: &NewUserRecord) -> Result<UserRecord, sqlx::Error>;

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, sqlx::Error>;

    /// Fetch every user in `users`; unknown ids are skipped.
    async fn get_users(&self, users: &[UserUuid]) -> Result<Vec<UserRecord>, sqlx::Error>;

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error>;

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error>;

    /// All users ordered by first name.
    async fn list_users(&self) -> Result<Vec<UserRecord>, sqlx::Error>;

    async fn list_deletion_requests(&self) -> Result<Vec<UserRecord>, sqlx::Error>;

    async fn update_role(&self, user: UserUuid, role: Role) -> Result<UserRecord, sqlx::Error>;

    async fn set_deletion_requested(
        &self,
        user: UserUuid,
        requested: bool,
    ) -> Result<UserRecord, sqlx::Error>;

    /// Returns the number of rows removed.
    async fn delete_user(&self, user: UserUuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn create_user(&self, user: &NewUserRecord) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(&user.delivery_address.street_address)
            .bind(&user.delivery_address.city)
            .bind(&user.delivery_address.state)
            .bind(&user.delivery_address.postal_code)
            .bind(&user.phone_number)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn get_users(&self, users: &[UserUuid]) -> Result<Vec<UserRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = users.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, UserRecord>(GET_USERS_SQL)
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_USERNAME_OR_EMAIL_SQL)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        let row = query(FIND_CREDENTIALS_SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok(UserCredentials {
                user_uuid: UserUuid::from_uuid(row.try_get("uuid")?),
                password_hash: row.try_get("password_hash")?,
            })
        })
        .transpose()
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(LIST_USERS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn list_deletion_requests(&self) -> Result<Vec<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(LIST_DELETION_REQUESTS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn update_role(&self, user: UserUuid, role: Role) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(UPDATE_ROLE_SQL)
            .bind(user.into_uuid())
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn set_deletion_requested(
        &self,
        user: UserUuid,
        requested: bool,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(SET_DELETION_REQUESTED_SQL)
            .bind(user.into_uuid())
            .bind(requested)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_user(&self, user: UserUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_USER_SQL)
            .bind(user.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        let role = role.parse::<Role>().map_err(|e| sqlx::Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            role,
            delivery_address: DeliveryAddress {
                street_address: row.try_get("street_address")?,
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                postal_code: row.try_get("postal_code")?,
            },
            phone_number: row.try_get("phone_number")?,
            deletion_requested: row.try_get("deletion_requested")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
