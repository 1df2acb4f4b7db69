//! My Bookings Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bookings::{errors::into_status_error, models::BookingResponse},
    extensions::*,
    state::State,
};

/// My Bookings Handler
#[endpoint(
    tags("bookings"),
    summary = "List My Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The caller's bookings"),
        (status_code = StatusCode::NOT_FOUND, description = "No bookings yet"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BookingResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let bookings = state
        .app
        .bookings
        .my_bookings(identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use rentals_app::domain::{
        bookings::{BookingsServiceError, MockBookingsService},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{TEST_CUSTOMER, customer_service, make_booking, strict_app};

    use super::*;

    fn make_service(bookings: MockBookingsService) -> Service {
        let mut app = strict_app();
        app.bookings = Arc::new(bookings);

        customer_service(app, Router::with_path("bookings/mine").get(handler))
    }

    #[tokio::test]
    async fn test_lists_own_bookings() -> TestResult {
        let booking = make_booking(TEST_CUSTOMER.user, ProductUuid::new());

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_my_bookings()
            .once()
            .withf(|identity| *identity == TEST_CUSTOMER)
            .return_once(move |_| Ok(vec![booking]));

        let mut res = TestClient::get("http://example.com/bookings/mine")
            .send(&make_service(bookings))
            .await;

        let body: Vec<BookingResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);
        assert_eq!(
            body.first().map(|booking| booking.user_uuid),
            Some(TEST_CUSTOMER.user.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_history_returns_404() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings
            .expect_my_bookings()
            .once()
            .return_once(|_| Err(BookingsServiceError::NotFound));

        let res = TestClient::get("http://example.com/bookings/mine")
            .send(&make_service(bookings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
