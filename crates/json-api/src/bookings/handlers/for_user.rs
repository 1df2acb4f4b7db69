//! Bookings for User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
    state::State,
};

/// Bookings for User Handler
#[endpoint(
    tags("bookings"),
    summary = "List a User's Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The user's bookings"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<BookingResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let bookings = state
        .app
        .bookings
        .bookings_for_user(identity, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
