//! Booking Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::bookings::models::{Booking, BookingItem};

use crate::summaries::{OwnerResponse, ProductSummaryResponse};

/// Booking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// Owner contact details, absent if the account is gone
    pub owner: Option<OwnerResponse>,

    pub email: String,
    pub items: Vec<BookingItemResponse>,

    /// Total as submitted at checkout
    pub total_price: u64,

    /// `YYYY-MM-DD`
    pub rental_date: String,

    pub delivery_address: String,
    pub event_notes: Option<String>,

    /// `pending`, `confirmed`, `completed` or `canceled`
    pub status: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            uuid: booking.uuid.into_uuid(),
            user_uuid: booking.user_uuid.into_uuid(),
            owner: booking.owner.map(OwnerResponse::from),
            email: booking.email,
            items: booking
                .items
                .into_iter()
                .map(BookingItemResponse::from)
                .collect(),
            total_price: booking.total_price,
            rental_date: booking.rental_date.to_string(),
            delivery_address: booking.delivery_address,
            event_notes: booking.event_notes,
            status: booking.status.to_string(),
            created_at: booking.created_at.to_string(),
            updated_at: booking.updated_at.to_string(),
        }
    }
}

/// Booking Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingItemResponse {
    pub product_uuid: Uuid,
    pub quantity: u32,

    /// Unit price captured at checkout
    pub price: u64,

    /// Current catalog details, absent if the product was deleted
    pub product: Option<ProductSummaryResponse>,
}

impl From<BookingItem> for BookingItemResponse {
    fn from(item: BookingItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into_uuid(),
            quantity: item.quantity,
            price: item.price,
            product: item.product.map(ProductSummaryResponse::from),
        }
    }
}
