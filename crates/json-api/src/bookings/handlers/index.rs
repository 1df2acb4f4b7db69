//! List Bookings Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
    state::State,
};

/// List Bookings Handler
#[endpoint(
    tags("bookings"),
    summary = "List All Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every booking"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BookingResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let bookings = state
        .app
        .bookings
        .list_bookings(identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
