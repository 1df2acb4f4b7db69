//! Create Booking Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::bookings::data::{NewBooking, NewBookingLine};

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    dates::parse_optional_date,
    extensions::*,
    state::State,
};

/// Booking Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingLineRequest {
    /// Product UUID as text
    pub product: String,

    pub quantity: u32,

    /// Unit price the customer saw
    pub price: u64,
}

/// Create Booking Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBookingRequest {
    pub email: Option<String>,

    #[serde(default)]
    pub items: Vec<BookingLineRequest>,

    pub total_price: Option<u64>,

    /// `YYYY-MM-DD`
    pub rental_date: Option<String>,

    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,
}

impl CreateBookingRequest {
    fn into_new_booking(self) -> Result<NewBooking, StatusError> {
        Ok(NewBooking {
            rental_date: parse_optional_date(self.rental_date.as_deref())?,
            email: self.email,
            items: self
                .items
                .into_iter()
                .map(|line| NewBookingLine {
                    product: line.product,
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
            total_price: self.total_price,
            delivery_address: self.delivery_address,
            event_notes: self.event_notes,
        })
    }
}

/// Create Booking Handler
///
/// Records the checkout as a confirmed booking. The caller's cart is left as is.
#[endpoint(
    tags("bookings"),
    summary = "Create Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bookings.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty, booking_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let booking = json.into_inner().into_new_booking()?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(identity.user));

    let booking = state
        .app
        .bookings
        .create_booking(identity, booking)
        .await
        .map_err(into_status_error)?;

    span.record("booking_uuid", tracing::field::display(booking.uuid));

    res.add_header(LOCATION, format!("/bookings/{}", booking.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(booking.into()))
}
