//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::carts::data::AddCartItem;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    dates::parse_optional_date,
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product: Option<Uuid>,
    pub quantity: Option<u32>,

    /// `YYYY-MM-DD`; must match the cart's date once it has items
    pub rental_date: Option<String>,
}

impl AddCartItemRequest {
    fn into_item(self) -> Result<AddCartItem, StatusError> {
        Ok(AddCartItem {
            product: self.product.map(Into::into),
            quantity: self.quantity,
            rental_date: parse_optional_date(self.rental_date.as_deref())?,
        })
    }
}

/// Add Cart Item Handler
///
/// Opens a cart when the caller has none. Adding a product already in the
/// cart increases its quantity and keeps the price captured first.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Rental date differs from the cart's"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.add_item",
    skip(json, depot),
    fields(
        user_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let item = json.into_inner().into_item()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(identity.user));

    if let Some(product) = item.product {
        span.record("product_uuid", tracing::field::display(product));
    }

    if let Some(quantity) = item.quantity {
        span.record("quantity", quantity);
    }

    let cart = state
        .app
        .carts
        .add_item(identity, item)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
