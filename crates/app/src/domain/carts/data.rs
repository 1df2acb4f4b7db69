//! Cart Data

use jiff::{Timestamp, civil::Date};

use crate::domain::{
    carts::records::{CartLines, CartStatus, CartUuid},
    products::records::ProductUuid,
    users::records::UserUuid,
};

/// Add-to-cart request. Every field is required; absent ones are rejected, not defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddCartItem {
    pub product: Option<ProductUuid>,
    pub quantity: Option<u32>,
    pub rental_date: Option<Date>,
}

/// Checkout details set on the active cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartDetailsUpdate {
    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,
    pub status: Option<CartStatus>,
}

/// New Cart Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub lines: CartLines,
    pub rental_date: Date,
    pub total_price: u64,
    pub expires_at: Timestamp,
}
