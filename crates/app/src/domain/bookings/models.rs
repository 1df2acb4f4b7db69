//! Booking Models

use jiff::{Timestamp, civil::Date};
use serde::Serialize;

use crate::domain::{
    bookings::records::{BookingLine, BookingRecord, BookingStatus, BookingUuid},
    lookup::Lookup,
    products::records::{ProductSummary, ProductUuid},
    users::records::{UserContact, UserUuid},
};

/// Booking with product and owner details resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub uuid: BookingUuid,
    pub user_uuid: UserUuid,
    pub owner: Option<UserContact>,
    pub email: String,
    pub items: Vec<BookingItem>,
    pub total_price: u64,
    pub rental_date: Date,
    pub delivery_address: String,
    pub event_notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub price: u64,
    pub product: Option<ProductSummary>,
}

impl Booking {
    pub(crate) fn resolve(record: BookingRecord, lookup: &Lookup) -> Self {
        Self {
            uuid: record.uuid,
            user_uuid: record.user_uuid,
            owner: lookup.contact(record.user_uuid),
            email: record.email,
            items: record
                .lines
                .iter()
                .map(|line| BookingItem::resolve(line, lookup))
                .collect(),
            total_price: record.total_price,
            rental_date: record.rental_date,
            delivery_address: record.delivery_address,
            event_notes: record.event_notes,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl BookingItem {
    fn resolve(line: &BookingLine, lookup: &Lookup) -> Self {
        Self {
            product_uuid: line.product_uuid,
            quantity: line.quantity,
            price: line.price,
            product: lookup.summary(line.product_uuid),
        }
    }
}
