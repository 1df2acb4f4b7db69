//! Carts Repository

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        carts::{
            data::NewCart,
            records::{CartLines, CartRecord, CartStatus, CartUuid},
        },
        users::records::UserUuid,
    },
};

const FIND_CART_FOR_USER_SQL: &str = include_str!("sql/find_cart_for_user.sql");
const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const LIST_CARTS_SQL: &str = include_str!("sql/list_carts.sql");
const CREATE_CART_SQL: &str = include_str!("sql/create_cart.sql");
const SAVE_CART_SQL: &str = include_str!("sql/save_cart.sql");
const DELETE_CART_SQL: &str = include_str!("sql/delete_cart.sql");
const PURGE_EXPIRED_CARTS_SQL: &str = include_str!("sql/purge_expired_carts.sql");

/// Cart persistence. Reads never return carts whose `expires_at` has passed.
#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// The user's newest unexpired cart.
    async fn find_cart_for_user(
        &self,
        user: UserUuid,
        now: Timestamp,
    ) -> Result<Option<CartRecord>, sqlx::Error>;

    async fn get_cart(&self, cart: CartUuid, now: Timestamp) -> Result<CartRecord, sqlx::Error>;

    async fn list_carts(&self, now: Timestamp) -> Result<Vec<CartRecord>, sqlx::Error>;

    async fn create_cart(&self, cart: &NewCart) -> Result<CartRecord, sqlx::Error>;

    /// Persist lines, total and checkout details. Fails with `RowNotFound` once the row is gone.
    async fn save_cart(&self, cart: &CartRecord) -> Result<CartRecord, sqlx::Error>;

    /// Returns the number of rows removed.
    async fn delete_cart(&self, cart: CartUuid) -> Result<u64, sqlx::Error>;

    /// Remove every cart that expired at or before `now`.
    async fn purge_expired(&self, now: Timestamp) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgCartsRepository {
    pool: PgPool,
}

impl PgCartsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn find_cart_for_user(
        &self,
        user: UserUuid,
        now: Timestamp,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(FIND_CART_FOR_USER_SQL)
            .bind(user.into_uuid())
            .bind(SqlxTimestamp::from(now))
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_cart(&self, cart: CartUuid, now: Timestamp) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(cart.into_uuid())
            .bind(SqlxTimestamp::from(now))
            .fetch_one(&self.pool)
            .await
    }

    async fn list_carts(&self, now: Timestamp) -> Result<Vec<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LIST_CARTS_SQL)
            .bind(SqlxTimestamp::from(now))
            .fetch_all(&self.pool)
            .await
    }

    async fn create_cart(&self, cart: &NewCart) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(CREATE_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(cart.user_uuid.into_uuid())
            .bind(Json(&cart.lines))
            .bind(SqlxDate::from(cart.rental_date))
            .bind(amount_to_i64("total_price", cart.total_price)?)
            .bind(SqlxTimestamp::from(cart.expires_at))
            .fetch_one(&self.pool)
            .await
    }

    async fn save_cart(&self, cart: &CartRecord) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(SAVE_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(Json(&cart.lines))
            .bind(amount_to_i64("total_price", cart.total_price)?)
            .bind(cart.delivery_address.as_deref())
            .bind(cart.event_notes.as_deref())
            .bind(cart.status.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_cart(&self, cart: CartUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_SQL)
            .bind(cart.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn purge_expired(&self, now: Timestamp) -> Result<u64, sqlx::Error> {
        let rows_affected = query(PURGE_EXPIRED_CARTS_SQL)
            .bind(SqlxTimestamp::from(now))
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<CartStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            lines: row.try_get::<Json<CartLines>, _>("lines")?.0,
            rental_date: row.try_get::<SqlxDate, _>("rental_date")?.to_jiff(),
            total_price: try_get_amount(row, "total_price")?,
            delivery_address: row.try_get("delivery_address")?,
            event_notes: row.try_get("event_notes")?,
            status,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
