//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::FORBIDDEN, description = "Cart belongs to someone else"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found or expired"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart_by_id(identity, cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use rentals_app::domain::{
        carts::{CartsServiceError, MockCartsService, records::CartUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{TEST_CUSTOMER, customer_service, make_cart, strict_app};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        let mut app = strict_app();
        app.carts = Arc::new(carts);

        customer_service(app, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_owner_gets_cart_by_id() -> TestResult {
        let cart = make_cart(TEST_CUSTOMER.user, ProductUuid::new());
        let uuid = cart.uuid;

        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart_by_id()
            .once()
            .withf(move |identity, requested| *identity == TEST_CUSTOMER && *requested == uuid)
            .return_once(move |_, _| Ok(cart));

        let mut res = TestClient::get(format!("http://example.com/carts/{uuid}"))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_foreign_cart_returns_403() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart_by_id()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Forbidden));

        let res = TestClient::get(format!("http://example.com/carts/{}", CartUuid::new()))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_cart_uuid_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart_by_id().never();

        let res = TestClient::get("http://example.com/carts/not-a-uuid")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
