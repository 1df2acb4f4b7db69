//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::carts::models::{Cart, CartItem};

use crate::summaries::{OwnerResponse, ProductSummaryResponse};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// Owner contact details, absent if the account is gone
    pub owner: Option<OwnerResponse>,

    pub items: Vec<CartItemResponse>,

    /// `YYYY-MM-DD`; every item in a cart shares it
    pub rental_date: String,

    /// Sum of line price times quantity
    pub total_price: u64,

    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,

    /// `active` or `pending`
    pub status: String,

    /// The cart disappears after this instant
    pub expires_at: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            uuid: cart.uuid.into_uuid(),
            user_uuid: cart.user_uuid.into_uuid(),
            owner: cart.owner.map(OwnerResponse::from),
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            rental_date: cart.rental_date.to_string(),
            total_price: cart.total_price,
            delivery_address: cart.delivery_address,
            event_notes: cart.event_notes,
            status: cart.status.to_string(),
            expires_at: cart.expires_at.to_string(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub product_uuid: Uuid,
    pub quantity: u32,

    /// Unit price stored on the line
    pub price: u64,

    /// Catalog details, absent if the product was deleted
    pub product: Option<ProductSummaryResponse>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_uuid: item.product_uuid.into_uuid(),
            quantity: item.quantity,
            price: item.price,
            product: item.product.map(ProductSummaryResponse::from),
        }
    }
}
