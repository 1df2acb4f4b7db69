//! Open Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    dates::parse_optional_date,
    extensions::*,
    state::State,
};

/// Open Cart Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct OpenCartRequest {
    /// `YYYY-MM-DD`; ignored when the caller already has a cart
    pub rental_date: Option<String>,
}

/// Open Cart Handler
///
/// Returns the caller's active cart, creating an empty one if there is none.
#[endpoint(
    tags("cart"),
    summary = "Open Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Active cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Rental date required for a new cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.open",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<OpenCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let rental_date = parse_optional_date(json.into_inner().rental_date.as_deref())?;

    tracing::Span::current().record("user_uuid", tracing::field::display(identity.user));

    let cart = state
        .app
        .carts
        .open_cart(identity, rental_date)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
