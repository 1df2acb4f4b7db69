//! Cart Models

use jiff::{Timestamp, civil::Date};
use serde::Serialize;

use crate::domain::{
    carts::records::{CartLine, CartRecord, CartStatus, CartUuid},
    lookup::Lookup,
    products::records::{ProductSummary, ProductUuid},
    users::records::{UserContact, UserUuid},
};

/// Cart with product and owner details resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub owner: Option<UserContact>,
    pub items: Vec<CartItem>,
    pub rental_date: Date,
    pub total_price: u64,
    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,
    pub status: CartStatus,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,

    /// Unit price captured when the line was added.
    pub price: u64,

    /// `None` once the product has been removed from the catalog.
    pub product: Option<ProductSummary>,
}

impl Cart {
    pub(crate) fn resolve(record: CartRecord, lookup: &Lookup) -> Self {
        let items = record
            .lines
            .iter()
            .map(|line| CartItem::resolve(line, lookup))
            .collect();

        Self {
            uuid: record.uuid,
            user_uuid: record.user_uuid,
            owner: lookup.contact(record.user_uuid),
            items,
            rental_date: record.rental_date,
            total_price: record.total_price,
            delivery_address: record.delivery_address,
            event_notes: record.event_notes,
            status: record.status,
            expires_at: record.expires_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl CartItem {
    fn resolve(line: &CartLine, lookup: &Lookup) -> Self {
        Self {
            product_uuid: line.product_uuid,
            quantity: line.quantity,
            price: line.price,
            product: lookup.summary(line.product_uuid),
        }
    }
}

/// Outcome of removing a line from a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartRemoval {
    /// The last line went, taking the cart with it.
    Deleted,
    Updated(Cart),
}
