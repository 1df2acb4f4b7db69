//! Delete Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{bookings::errors::into_status_error, extensions::*, state::State};

/// Delete Booking Handler
#[endpoint(
    tags("bookings"),
    summary = "Delete Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "bookings.delete", skip(booking, depot), err)]
pub(crate) async fn handler(
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    state
        .app
        .bookings
        .delete_booking(identity, booking.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use rentals_app::domain::bookings::{
        BookingsServiceError, MockBookingsService, records::BookingUuid,
    };

    use crate::test_helpers::{
        TEST_ADMIN, TEST_CUSTOMER, admin_service, customer_service, strict_app,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("bookings/{booking}").delete(handler)
    }

    #[tokio::test]
    async fn test_admin_deletes_booking() -> TestResult {
        let uuid = BookingUuid::new();

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_delete_booking()
            .once()
            .withf(move |identity, requested| *identity == TEST_ADMIN && *requested == uuid)
            .return_once(|_, _| Ok(()));

        let mut app = strict_app();
        app.bookings = Arc::new(bookings);

        let res = TestClient::delete(format!("http://example.com/bookings/{uuid}"))
            .send(&admin_service(app, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_cannot_delete() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings
            .expect_delete_booking()
            .once()
            .withf(|identity, _| *identity == TEST_CUSTOMER)
            .return_once(|_, _| Err(BookingsServiceError::Forbidden));

        let mut app = strict_app();
        app.bookings = Arc::new(bookings);

        let res = TestClient::delete(format!("http://example.com/bookings/{}", BookingUuid::new()))
            .send(&customer_service(app, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
