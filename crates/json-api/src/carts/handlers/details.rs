//! Update Cart Details Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use rentals_app::domain::carts::{data::CartDetailsUpdate, records::CartStatus};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Details Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartDetailsRequest {
    pub delivery_address: Option<String>,
    pub event_notes: Option<String>,

    /// `active` or `pending`
    pub status: Option<String>,
}

impl UpdateCartDetailsRequest {
    fn into_update(self) -> Result<CartDetailsUpdate, StatusError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<CartStatus>)
            .transpose()
            .or_400("Unknown cart status")?;

        Ok(CartDetailsUpdate {
            delivery_address: self.delivery_address,
            event_notes: self.event_notes,
            status,
        })
    }
}

/// Update Cart Details Handler
#[endpoint(
    tags("cart"),
    summary = "Update Checkout Details",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "No active cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.update_details",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateCartDetailsRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let update = json.into_inner().into_update()?;

    tracing::Span::current().record("user_uuid", tracing::field::display(identity.user));

    let cart = state
        .app
        .carts
        .update_details(identity, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use rentals_app::domain::{
        carts::{CartsServiceError, MockCartsService},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{TEST_CUSTOMER, customer_service, make_cart, strict_app};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        let mut app = strict_app();
        app.carts = Arc::new(carts);

        customer_service(app, Router::with_path("cart").patch(handler))
    }

    #[tokio::test]
    async fn test_update_details_moves_cart_to_pending() -> TestResult {
        let mut cart = make_cart(TEST_CUSTOMER.user, ProductUuid::new());

        cart.delivery_address = Some("12 Elm Street".to_string());
        cart.status = CartStatus::Pending;

        let mut carts = MockCartsService::new();

        carts
            .expect_update_details()
            .once()
            .withf(|identity, update| {
                *identity == TEST_CUSTOMER
                    && *update
                        == CartDetailsUpdate {
                            delivery_address: Some("12 Elm Street".to_string()),
                            event_notes: None,
                            status: Some(CartStatus::Pending),
                        }
            })
            .return_once(move |_, _| Ok(cart));

        let mut res = TestClient::patch("http://example.com/cart")
            .json(&json!({ "delivery_address": "12 Elm Street", "status": "pending" }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "pending");
        assert_eq!(body.delivery_address.as_deref(), Some("12 Elm Street"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_details().never();

        let res = TestClient::patch("http://example.com/cart")
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_details_without_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_details()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::patch("http://example.com/cart")
            .json(&json!({ "event_notes": "Gate code 1234" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
