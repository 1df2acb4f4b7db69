//! Get Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, models::PromotionResponse},
    state::State,
};

/// Get Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Get Promotion",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Promotion found"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin access required"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    promotion: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let promotion = state
        .app
        .promotions
        .get_promotion(identity, promotion.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(promotion.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use rentals_app::domain::promotions::{
        MockPromotionsService, PromotionsServiceError, records::PromotionUuid,
    };

    use crate::test_helpers::{TEST_ADMIN, admin_service, make_promotion, strict_app};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        let mut app = strict_app();
        app.promotions = Arc::new(promotions);

        admin_service(app, Router::with_path("promotions/{promotion}").get(handler))
    }

    #[tokio::test]
    async fn test_get_promotion() -> TestResult {
        let uuid = PromotionUuid::new();
        let promotion = make_promotion(uuid);

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_get_promotion()
            .once()
            .withf(move |identity, requested| *identity == TEST_ADMIN && *requested == uuid)
            .return_once(move |_, _| Ok(promotion));

        let mut res = TestClient::get(format!("http://example.com/promotions/{uuid}"))
            .send(&make_service(promotions))
            .await;

        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.created_by, TEST_ADMIN.user.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_promotion_returns_404() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_get_promotion()
            .once()
            .return_once(|_, _| Err(PromotionsServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/promotions/{}",
            PromotionUuid::new()
        ))
        .send(&make_service(promotions))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
