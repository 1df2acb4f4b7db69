//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::carts::models::CartRemoval;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveCartItemResponse {
    /// Set when the removed line was the last one and the cart is gone
    pub cart_deleted: bool,

    pub cart: Option<CartResponse>,
}

impl From<CartRemoval> for RemoveCartItemResponse {
    fn from(removal: CartRemoval) -> Self {
        match removal {
            CartRemoval::Deleted => Self {
                cart_deleted: true,
                cart: None,
            },
            CartRemoval::Updated(cart) => Self {
                cart_deleted: false,
                cart: Some(cart.into()),
            },
        }
    }
}

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Item from Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.remove_item", skip(product, depot), err)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RemoveCartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let removal = state
        .app
        .carts
        .remove_item(identity, product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(removal.into()))
}
