//! List Promotions Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, models::PromotionResponse},
    state::State,
};

/// List Promotions Handler
#[endpoint(
    tags("promotions"),
    summary = "List Promotions",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every promotion"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "No promotions"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PromotionResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let promotions = state
        .app
        .promotions
        .list_promotions(identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        promotions.into_iter().map(PromotionResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use rentals_app::domain::promotions::{
        MockPromotionsService, PromotionsServiceError, records::PromotionUuid,
    };

    use crate::test_helpers::{
        TEST_ADMIN, admin_service, customer_service, make_promotion, strict_app,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("promotions").get(handler)
    }

    #[tokio::test]
    async fn test_admin_lists_inactive_too() -> TestResult {
        let mut inactive = make_promotion(PromotionUuid::new());

        inactive.is_active = false;

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .withf(|identity| *identity == TEST_ADMIN)
            .return_once(move |_| Ok(vec![inactive]));

        let mut app = strict_app();
        app.promotions = Arc::new(promotions);

        let mut res = TestClient::get("http://example.com/promotions")
            .send(&admin_service(app, route()))
            .await;

        let body: Vec<PromotionResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.first().map(|p| p.is_active), Some(false));

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_gets_403() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .return_once(|_| Err(PromotionsServiceError::Forbidden));

        let mut app = strict_app();
        app.promotions = Arc::new(promotions);

        let res = TestClient::get("http://example.com/promotions")
            .send(&customer_service(app, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
