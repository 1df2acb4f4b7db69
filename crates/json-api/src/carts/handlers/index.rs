//! List Carts Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// List Carts Handler
#[endpoint(
    tags("carts"),
    summary = "List Live Carts",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every unexpired cart"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let carts = state
        .app
        .carts
        .list_carts(identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(carts.into_iter().map(CartResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use rentals_app::domain::{
        carts::{CartsServiceError, MockCartsService},
        products::records::ProductUuid,
        users::records::UserUuid,
    };

    use crate::test_helpers::{
        TEST_ADMIN, admin_service, customer_service, make_cart, strict_app,
    };

    use super::*;

    fn app_with(carts: MockCartsService) -> rentals_app::context::AppContext {
        let mut app = strict_app();
        app.carts = Arc::new(carts);
        app
    }

    #[tokio::test]
    async fn test_admin_lists_all_carts() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_carts()
            .once()
            .withf(|identity| *identity == TEST_ADMIN)
            .return_once(|_| {
                Ok(vec![
                    make_cart(UserUuid::new(), ProductUuid::new()),
                    make_cart(UserUuid::new(), ProductUuid::new()),
                ])
            });

        let mut res = TestClient::get("http://example.com/carts")
            .send(&admin_service(
                app_with(carts),
                Router::with_path("carts").get(handler),
            ))
            .await;

        let body: Vec<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_cannot_list_carts() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_carts()
            .once()
            .return_once(|_| Err(CartsServiceError::Forbidden));

        let res = TestClient::get("http://example.com/carts")
            .send(&customer_service(
                app_with(carts),
                Router::with_path("carts").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
