//! Bookings Repository

use async_trait::async_trait;
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        bookings::{
            data::NewBookingRecord,
            records::{BookingLines, BookingRecord, BookingStatus, BookingUuid},
        },
        users::records::UserUuid,
    },
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const GET_BOOKING_SQL: &str = include_str!("sql/get_booking.sql");
const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");
const LIST_BOOKINGS_FOR_USER_SQL: &str = include_str!("sql/list_bookings_for_user.sql");
const UPDATE_BOOKING_STATUS_SQL: &str = include_str!("sql/update_booking_status.sql");
const DELETE_BOOKING_SQL: &str = include_str!("sql/delete_booking.sql");

#[automock]
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    async fn create_booking(&self, booking: &NewBookingRecord)
    -> Result<BookingRecord, sqlx::Error>;

    async fn get_booking(&self, booking: BookingUuid) -> Result<BookingRecord, sqlx::Error>;

    /// All bookings, newest first.
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, sqlx::Error>;

    /// A user's bookings, newest first.
    async fn list_bookings_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<BookingRecord>, sqlx::Error>;

    async fn update_status(
        &self,
        booking: BookingUuid,
        status: BookingStatus,
    ) -> Result<BookingRecord, sqlx::Error>;

    /// Returns the number of rows removed.
    async fn delete_booking(&self, booking: BookingUuid) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgBookingsRepository {
    pool: PgPool,
}

impl PgBookingsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingsRepository for PgBookingsRepository {
    async fn create_booking(
        &self,
        booking: &NewBookingRecord,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(booking.uuid.into_uuid())
            .bind(booking.user_uuid.into_uuid())
            .bind(&booking.email)
            .bind(Json(&booking.lines))
            .bind(amount_to_i64("total_price", booking.total_price)?)
            .bind(SqlxDate::from(booking.rental_date))
            .bind(&booking.delivery_address)
            .bind(booking.event_notes.as_deref())
            .bind(booking.status.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn get_booking(&self, booking: BookingUuid) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(GET_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn list_bookings_for_user(
        &self,
        user: UserUuid,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&self.pool)
            .await
    }

    async fn update_status(
        &self,
        booking: BookingUuid,
        status: BookingStatus,
    ) -> Result<BookingRecord, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(UPDATE_BOOKING_STATUS_SQL)
            .bind(booking.into_uuid())
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_booking(&self, booking: BookingUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOKING_SQL)
            .bind(booking.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<BookingStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            email: row.try_get("email")?,
            lines: row.try_get::<Json<BookingLines>, _>("lines")?.0,
            total_price: try_get_amount(row, "total_price")?,
            rental_date: row.try_get::<SqlxDate, _>("rental_date")?.to_jiff(),
            delivery_address: row.try_get("delivery_address")?,
            event_notes: row.try_get("event_notes")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
