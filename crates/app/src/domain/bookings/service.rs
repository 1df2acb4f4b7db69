//! Bookings service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::Identity,
    domain::{
        bookings::{
            data::NewBooking,
            errors::BookingsServiceError,
            models::Booking,
            records::{BookingRecord, BookingStatus, BookingUuid},
            repository::BookingsRepository,
        },
        lookup::Lookup,
        products::{ProductsRepository, records::ProductUuid},
        users::{UsersRepository, records::UserUuid},
    },
};

#[derive(Clone)]
pub struct BookingsManager {
    bookings: Arc<dyn BookingsRepository>,
    products: Arc<dyn ProductsRepository>,
    users: Arc<dyn UsersRepository>,
}

impl BookingsManager {
    #[must_use]
    pub fn new(
        bookings: Arc<dyn BookingsRepository>,
        products: Arc<dyn ProductsRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            bookings,
            products,
            users,
        }
    }

    async fn resolve_all(
        &self,
        records: Vec<BookingRecord>,
    ) -> Result<Vec<Booking>, BookingsServiceError> {
        let product_uuids: Vec<ProductUuid> = records
            .iter()
            .flat_map(|record| record.lines.iter().map(|line| line.product_uuid))
            .collect();
        let user_uuids: Vec<UserUuid> = records.iter().map(|record| record.user_uuid).collect();

        let lookup = Lookup::load(
            self.products.as_ref(),
            self.users.as_ref(),
            &product_uuids,
            &user_uuids,
        )
        .await?;

        Ok(records
            .into_iter()
            .map(|record| Booking::resolve(record, &lookup))
            .collect())
    }

    async fn resolve(&self, record: BookingRecord) -> Result<Booking, BookingsServiceError> {
        self.resolve_all(vec![record])
            .await?
            .pop()
            .ok_or(BookingsServiceError::NotFound)
    }
}

fn require_admin(identity: Identity) -> Result<(), BookingsServiceError> {
    if identity.is_admin {
        Ok(())
    } else {
        Err(BookingsServiceError::Forbidden)
    }
}

#[async_trait]
impl BookingsService for BookingsManager {
    async fn create_booking(
        &self,
        identity: Identity,
        booking: NewBooking,
    ) -> Result<Booking, BookingsServiceError> {
        let record = booking.into_record(identity.user)?;

        let created = self.bookings.create_booking(&record).await?;

        info!(
            booking_uuid = %created.uuid,
            user_uuid = %created.user_uuid,
            total_price = created.total_price,
            "created booking"
        );

        self.resolve(created).await
    }

    async fn my_bookings(&self, identity: Identity) -> Result<Vec<Booking>, BookingsServiceError> {
        let records = self.bookings.list_bookings_for_user(identity.user).await?;

        if records.is_empty() {
            return Err(BookingsServiceError::NotFound);
        }

        self.resolve_all(records).await
    }

    async fn get_booking(
        &self,
        identity: Identity,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError> {
        let record = self.bookings.get_booking(booking).await?;

        if !identity.can_access(record.user_uuid) {
            return Err(BookingsServiceError::Forbidden);
        }

        self.resolve(record).await
    }

    async fn bookings_for_user(
        &self,
        identity: Identity,
        user: UserUuid,
    ) -> Result<Vec<Booking>, BookingsServiceError> {
        require_admin(identity)?;

        let records = self.bookings.list_bookings_for_user(user).await?;

        self.resolve_all(records).await
    }

    async fn list_bookings(&self, identity: Identity) -> Result<Vec<Booking>, BookingsServiceError> {
        require_admin(identity)?;

        let records = self.bookings.list_bookings().await?;

        self.resolve_all(records).await
    }

    async fn update_status(
        &self,
        identity: Identity,
        booking: BookingUuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingsServiceError> {
        require_admin(identity)?;

        let updated = self.bookings.update_status(booking, status).await?;

        info!(booking_uuid = %booking, %status, "updated booking status");

        self.resolve(updated).await
    }

    async fn delete_booking(
        &self,
        identity: Identity,
        booking: BookingUuid,
    ) -> Result<(), BookingsServiceError> {
        require_admin(identity)?;

        if self.bookings.delete_booking(booking).await? == 0 {
            return Err(BookingsServiceError::NotFound);
        }

        info!(booking_uuid = %booking, "deleted booking");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Record a checkout for the caller. The owner always comes from `identity`.
    async fn create_booking(
        &self,
        identity: Identity,
        booking: NewBooking,
    ) -> Result<Booking, BookingsServiceError>;

    /// The caller's bookings. An empty history is `NotFound`.
    async fn my_bookings(&self, identity: Identity) -> Result<Vec<Booking>, BookingsServiceError>;

    async fn get_booking(
        &self,
        identity: Identity,
        booking: BookingUuid,
    ) -> Result<Booking, BookingsServiceError>;

    /// Admin only.
    async fn bookings_for_user(
        &self,
        identity: Identity,
        user: UserUuid,
    ) -> Result<Vec<Booking>, BookingsServiceError>;

    /// Admin only.
    async fn list_bookings(&self, identity: Identity) -> Result<Vec<Booking>, BookingsServiceError>;

    /// Admin only. Any status may follow any other.
    async fn update_status(
        &self,
        identity: Identity,
        booking: BookingUuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingsServiceError>;

    /// Admin only.
    async fn delete_booking(
        &self,
        identity: Identity,
        booking: BookingUuid,
    ) -> Result<(), BookingsServiceError>;
}
