//! Update Booking Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentals_app::domain::bookings::{BookingsServiceError, records::BookingStatus};

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
    state::State,
};

/// Update Booking Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBookingStatusRequest {
    /// `pending`, `confirmed`, `completed` or `canceled`
    pub status: String,
}

/// Update Booking Status Handler
///
/// Any status may follow any other.
#[endpoint(
    tags("bookings"),
    summary = "Update Booking Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "bookings.update_status",
    skip(booking, json, depot),
    fields(booking_uuid = tracing::field::Empty, status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    json: JsonBody<UpdateBookingStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let booking = booking.into_inner();

    if !identity.is_admin {
        return Err(into_status_error(BookingsServiceError::Forbidden));
    }

    let status = json
        .into_inner()
        .status
        .parse::<BookingStatus>()
        .or_400("Unknown booking status")?;

    let span = tracing::Span::current();

    span.record("booking_uuid", tracing::field::display(booking));
    span.record("status", status.as_str());

    let booking = state
        .app
        .bookings
        .update_status(identity, booking.into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use rentals_app::domain::{
        bookings::{MockBookingsService, records::BookingUuid},
        products::records::ProductUuid,
        users::records::UserUuid,
    };

    use crate::test_helpers::{
        TEST_ADMIN, admin_service, customer_service, make_booking, strict_app,
    };

    use super::*;

    fn make_service(bookings: MockBookingsService) -> Service {
        let mut app = strict_app();
        app.bookings = Arc::new(bookings);

        admin_service(app, Router::with_path("bookings/{booking}/status").patch(handler))
    }

    #[tokio::test]
    async fn test_status_is_parsed_case_insensitively() -> TestResult {
        let mut booking = make_booking(UserUuid::new(), ProductUuid::new());
        let uuid = booking.uuid;

        booking.status = BookingStatus::Canceled;

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_update_status()
            .once()
            .withf(move |identity, requested, status| {
                *identity == TEST_ADMIN && *requested == uuid && *status == BookingStatus::Canceled
            })
            .return_once(move |_, _, _| Ok(booking));

        let mut res = TestClient::patch(format!("http://example.com/bookings/{uuid}/status"))
            .json(&json!({ "status": "Canceled" }))
            .send(&make_service(bookings))
            .await;

        let body: BookingResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "canceled");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings.expect_update_status().never();

        let res = TestClient::patch(format!(
            "http://example.com/bookings/{}/status",
            BookingUuid::new()
        ))
        .json(&json!({ "status": "shipped" }))
        .send(&make_service(bookings))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_booking_returns_404() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings
            .expect_update_status()
            .once()
            .return_once(|_, _, _| Err(BookingsServiceError::NotFound));

        let res = TestClient::patch(format!(
            "http://example.com/bookings/{}/status",
            BookingUuid::new()
        ))
        .json(&json!({ "status": "completed" }))
        .send(&make_service(bookings))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_with_unknown_status_is_forbidden() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings.expect_update_status().never();

        let mut app = strict_app();
        app.bookings = Arc::new(bookings);

        let service = customer_service(
            app,
            Router::with_path("bookings/{booking}/status").patch(handler),
        );

        let res = TestClient::patch(format!(
            "http://example.com/bookings/{}/status",
            BookingUuid::new()
        ))
        .json(&json!({ "status": "shipped" }))
        .send(&service)
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
